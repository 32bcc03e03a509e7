use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use fileverse::transport::{Response, TcpTransport, Transport, TransportError};

/// Accepts one client and answers each received line with the next scripted
/// reply. Returns the lines it received once the script runs out.
fn fake_server(replies: Vec<&'static str>) -> (u16, JoinHandle<Vec<String>>) {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	let handle = thread::spawn(move || {
		let (stream, _) = listener.accept().unwrap();
		let mut writer = stream.try_clone().unwrap();
		let mut reader = BufReader::new(stream);
		let mut received = Vec::new();
		for reply in replies {
			let mut line = String::new();
			if reader.read_line(&mut line).unwrap() == 0 {
				break;
			}
			received.push(line);
			writer.write_all(reply.as_bytes()).unwrap();
			writer.flush().unwrap();
		}
		received
	});
	(port, handle)
}

#[test]
fn commands_are_newline_framed_and_replies_parsed() {
	let (port, server) = fake_server(vec![
		"{\"status\":\"success\",\"data\":\"a.txt\\\\nb.txt\"}\n",
		"{\"status\":\"error\",\"error_message\":\"permission denied\"}\n",
		"raw listing\n",
	]);
	let mut transport = TcpTransport::connect("127.0.0.1", port).unwrap();

	let listing = transport.send("dir_list /").unwrap();
	assert_eq!(listing.data(), Some("a.txt\\nb.txt"));

	let denied = transport.send("delete_dir /etc").unwrap();
	assert_eq!(denied, Response::Error { message: "permission denied".to_string() });

	let raw = transport.send("get_session_info").unwrap();
	assert_eq!(raw.data(), Some("raw listing"));

	drop(transport);
	let received = server.join().unwrap();
	assert_eq!(received, ["dir_list /\n", "delete_dir /etc\n", "get_session_info\n"]);
}

#[test]
fn multi_line_command_is_refused_before_sending() {
	let (port, server) = fake_server(vec!["{\"success\":true}\n"]);
	let mut transport = TcpTransport::connect("127.0.0.1", port).unwrap();

	assert!(matches!(transport.send("create_file /a \"x\ny\""), Err(TransportError::MultiLineCommand)));
	assert!(transport.send("logout").unwrap().is_success());

	drop(transport);
	assert_eq!(server.join().unwrap(), ["logout\n"]);
}

#[test]
fn server_hangup_is_reported_as_closed() {
	let (port, server) = fake_server(Vec::new());
	let mut transport = TcpTransport::connect("127.0.0.1", port).unwrap();
	server.join().unwrap();

	let err = transport.send("list_users");
	assert!(matches!(err, Err(TransportError::Closed | TransportError::Send { .. } | TransportError::Receive { .. })));
}

#[test]
fn refused_connection_names_the_address() {
	let listener = TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	drop(listener);

	match TcpTransport::connect("127.0.0.1", port) {
		Err(TransportError::Connect { addr, .. }) => assert_eq!(addr, format!("127.0.0.1:{}", port)),
		Err(other) => panic!("unexpected error: {other}"),
		Ok(_) => panic!("connection to a closed port succeeded"),
	}
}
