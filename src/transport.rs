use std::io::{self, BufRead, BufReader, Write};
use std::net::TcpStream;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("connect to {addr} failed")]
	Connect {
		addr:   String,
		#[source]
		source: io::Error,
	},
	#[error("command must fit on a single line")]
	MultiLineCommand,
	#[error("send command failed")]
	Send {
		#[source]
		source: io::Error,
	},
	#[error("receive reply failed")]
	Receive {
		#[source]
		source: io::Error,
	},
	#[error("connection closed by server")]
	Closed,
}

/// Outcome of one request as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
	Success { data: Option<String> },
	Error { message: String },
}

impl Response {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { .. })
	}

	/// Reply payload when the request succeeded and carried non-empty data.
	pub fn data(&self) -> Option<&str> {
		match self {
			Self::Success { data: Some(data) } if !data.is_empty() => Some(data.as_str()),
			_ => None,
		}
	}

	pub fn error_message(&self) -> Option<&str> {
		match self {
			Self::Error { message } => Some(message.as_str()),
			Self::Success { .. } => None,
		}
	}
}

/// One request in flight at a time: the caller waits for the reply before the
/// next command goes out.
pub trait Transport {
	fn send(&mut self, command: &str) -> Result<Response, TransportError>;
}

pub struct TcpTransport {
	reader: BufReader<TcpStream>,
	writer: TcpStream,
}

impl TcpTransport {
	pub fn connect(host: &str, port: u16) -> Result<Self, TransportError> {
		let addr = format!("{}:{}", host, port);
		let stream =
			TcpStream::connect(addr.as_str()).map_err(|source| TransportError::Connect { addr: addr.clone(), source })?;
		let writer = stream.try_clone().map_err(|source| TransportError::Connect { addr: addr.clone(), source })?;
		info!("connected to {}", addr);
		Ok(Self { reader: BufReader::new(stream), writer })
	}
}

impl Transport for TcpTransport {
	fn send(&mut self, command: &str) -> Result<Response, TransportError> {
		if command.contains('\n') {
			return Err(TransportError::MultiLineCommand);
		}
		debug!("send: {}", command);

		let mut line = String::with_capacity(command.len() + 1);
		line.push_str(command);
		line.push('\n');
		self.writer.write_all(line.as_bytes()).map_err(|source| TransportError::Send { source })?;
		self.writer.flush().map_err(|source| TransportError::Send { source })?;

		let mut reply = Vec::new();
		let read = self.reader.read_until(b'\n', &mut reply).map_err(|source| TransportError::Receive { source })?;
		if read == 0 {
			return Err(TransportError::Closed);
		}
		let reply = String::from_utf8_lossy(&reply);
		debug!("recv: {}", reply.trim_end());
		Ok(parse_reply(&reply))
	}
}

#[derive(Debug, Deserialize)]
struct WireReply {
	status:        Option<String>,
	success:       Option<bool>,
	data:          Option<serde_json::Value>,
	error_message: Option<String>,
	message:       Option<String>,
}

/// Interprets one reply line.
///
/// Structured replies come in two dialects, `{"status": ..}` and
/// `{"success": ..}`. Anything that is not a JSON object is treated as a
/// successful reply whose data is the raw text.
pub fn parse_reply(raw: &str) -> Response {
	let text = raw.trim_end_matches(['\r', '\n']);
	let Ok(reply) = serde_json::from_str::<WireReply>(text) else {
		return Response::Success { data: Some(text.to_string()) };
	};

	let succeeded = match (reply.status.as_deref(), reply.success) {
		(Some(status), _) => status == "success",
		(None, Some(success)) => success,
		(None, None) => return Response::Success { data: Some(text.to_string()) },
	};

	if succeeded {
		let data = reply.data.and_then(|value| match value {
			serde_json::Value::Null => None,
			serde_json::Value::String(text) => Some(text),
			other => Some(other.to_string()),
		});
		Response::Success { data }
	} else {
		let message = reply
			.error_message
			.or(reply.message)
			.unwrap_or_else(|| "Operation failed".to_string());
		Response::Error { message }
	}
}
