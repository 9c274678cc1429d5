use crate::events::AppEvent;
use async_channel::Sender;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/tintwheel.sock";

/// Parses one control line: `reset`, `hue <n>` or `shade <n>`.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    let index = words.next().map(str::parse::<usize>);
    if words.next().is_some() {
        return None;
    }

    match (command, index) {
        ("reset", None) => Some(AppEvent::Reset),
        ("hue", Some(Ok(i))) => Some(AppEvent::SelectHue(i)),
        ("shade", Some(Ok(i))) => Some(AppEvent::SelectShade(i)),
        _ => None,
    }
}

pub async fn run_server(tx: Sender<AppEvent>, socket_path: PathBuf) {
    // Cleanup old socket if it exists
    if fs_err::metadata(&socket_path).is_ok() {
        let _ = fs_err::remove_file(&socket_path);
    }

    let listener = match UnixListener::bind(&socket_path) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket {}: {}", socket_path.display(), e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_command(&line) {
                            Some(event) => {
                                let _ = tx.send(event).await;
                            }
                            None => log::warn!("Unknown control command: {:?}", line.trim()),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
