//! Minimal RESP2 server for integration tests.
//!
//! Records every command it receives and answers with canned replies, enough
//! for the store facade and the demo sequence. It can be told to fail one
//! command, or to accept connections and never answer.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Debug, Clone, Default)]
pub struct RespServerOptions {
    /// Names returned for any `KEYS` pattern.
    pub keys: Vec<String>,
    /// Command name (upper case) answered with an error reply.
    pub fail_command: Option<&'static str>,
    /// Read requests but never reply.
    pub silent: bool,
}

type Log = Arc<Mutex<Vec<Vec<String>>>>;

pub struct RespServer {
    pub port: u16,
    commands: Log,
}

impl RespServer {
    /// Every command received so far, in arrival order.
    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.lock().unwrap().clone()
    }

    /// Commands whose name matches `name` (case-insensitive).
    pub fn commands_named(&self, name: &str) -> Vec<Vec<String>> {
        self.commands()
            .into_iter()
            .filter(|c| c.first().is_some_and(|n| n.eq_ignore_ascii_case(name)))
            .collect()
    }
}

/// Starts a server in a background thread on a free loopback port.
/// The server runs until the process exits.
pub fn start(opts: RespServerOptions) -> RespServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let commands: Log = Arc::default();
    let recorded = Arc::clone(&commands);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &opts, &recorded));
        }
    });
    RespServer { port, commands }
}

fn handle(stream: TcpStream, opts: &RespServerOptions, recorded: &Mutex<Vec<Vec<String>>>) {
    let mut writer = match stream.try_clone() {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut reader = BufReader::new(stream);
    if opts.silent {
        let mut sink = [0u8; 1024];
        while matches!(reader.read(&mut sink), Ok(n) if n > 0) {}
        return;
    }
    while let Some(cmd) = read_command(&mut reader) {
        let reply = reply_for(&cmd, opts);
        recorded.lock().unwrap().push(cmd);
        if writer.write_all(reply.as_bytes()).is_err() {
            return;
        }
    }
}

fn read_line(reader: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches("\r\n").to_string()),
    }
}

/// One request: an array of bulk strings.
fn read_command(reader: &mut impl BufRead) -> Option<Vec<String>> {
    let header = read_line(reader)?;
    let count: usize = header.strip_prefix('*')?.parse().ok()?;
    let mut args = Vec::with_capacity(count);
    for _ in 0..count {
        let line = read_line(reader)?;
        let len: usize = line.strip_prefix('$')?.parse().ok()?;
        let mut buf = vec![0u8; len + 2];
        reader.read_exact(&mut buf).ok()?;
        buf.truncate(len);
        args.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Some(args)
}

fn bulk(s: &str) -> String {
    format!("${}\r\n{}\r\n", s.len(), s)
}

fn array(items: &[&str]) -> String {
    let mut out = format!("*{}\r\n", items.len());
    for item in items {
        out.push_str(&bulk(item));
    }
    out
}

fn int(n: usize) -> String {
    format!(":{n}\r\n")
}

fn reply_for(cmd: &[String], opts: &RespServerOptions) -> String {
    let name = cmd
        .first()
        .map(|s| s.to_ascii_uppercase())
        .unwrap_or_default();
    if opts.fail_command == Some(name.as_str()) {
        return "-ERR injected failure\r\n".to_string();
    }
    match name.as_str() {
        "PING" => "+PONG\r\n".to_string(),
        "GET" => bulk("hello, world"),
        "APPEND" => int(12),
        "TTL" => int(60),
        "INCRBY" => int(6),
        "HSET" | "HDEL" | "EXISTS" | "LLEN" => int(1),
        "HGET" => bulk("rust"),
        "HGETALL" => array(&["lang", "rust", "name", "Ada"]),
        "LPUSH" | "RPUSH" => int(3),
        "LRANGE" => array(&["job-0", "job-1", "job-2"]),
        "LPOP" => bulk("job-0"),
        "RPOP" => bulk("job-2"),
        "KEYS" => {
            let names: Vec<&str> = opts.keys.iter().map(String::as_str).collect();
            array(&names)
        }
        "DBSIZE" => int(opts.keys.len()),
        "DEL" => int(cmd.len().saturating_sub(1)),
        // SET, SETEX, HMSET, SELECT, CLIENT SETINFO, ...
        _ => "+OK\r\n".to_string(),
    }
}
