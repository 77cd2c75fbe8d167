use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use jobindex_scraper::ScraperConfig;

/// Serves one canned body per connection, picked by the `page` query
/// parameter, and reports each request head on the returned channel.
pub fn serve(bodies: Vec<&'static str>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }

            let page: usize = head
                .split_whitespace()
                .nth(1)
                .and_then(|target| target.split("page=").nth(1))
                .and_then(|rest| rest.split('&').next())
                .and_then(|n| n.parse().ok())
                .unwrap_or(1);
            let body = bodies.get(page.saturating_sub(1)).copied().unwrap_or("{}");

            let _ = write!(
                stream,
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.flush();
            let _ = tx.send(head);
        }
    });

    (format!("http://{addr}/api/jobsearch/v3/?address=Arden&page=7&sort=score"), rx)
}

/// URL on a local port nothing listens on.
pub fn refused_url() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}/api?page=1")
}

#[allow(dead_code)]
pub fn config() -> ScraperConfig {
    ScraperConfig {
        timeout: Duration::from_secs(5),
        ..ScraperConfig::default()
    }
}
