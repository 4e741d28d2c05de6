// Shared helpers for integration tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use lingo_relay::translate::{RandomSource, Translator};
use lingo_relay::TranslatorConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Hands out 0, 1, 2, ... wrapping at the pool size.
#[derive(Debug, Default)]
pub struct CyclingRandom {
    next: AtomicUsize,
}

impl RandomSource for CyclingRandom {
    fn pick(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::SeqCst) % len
    }
}

pub fn endpoint(server: &mockito::ServerGuard) -> String {
    format!("{}/translate", server.url())
}

pub fn translator_for(endpoints: Vec<String>) -> Translator {
    Translator::new(&TranslatorConfig::with_endpoints(endpoints)).unwrap()
}

pub fn cycling_translator_for(endpoints: Vec<String>) -> Translator {
    Translator::with_random_source(
        &TranslatorConfig::with_endpoints(endpoints),
        Arc::new(CyclingRandom::default()),
    )
    .unwrap()
}

/// An endpoint that accepts connections and never answers.
pub async fn stalled_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}/translate", addr)
}
