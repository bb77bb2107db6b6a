
use std::sync::atomic::{AtomicU64, Ordering};

/*
 * Hands out the serial codes used to label automaton states.
 * Two calls never return the same code.
 */
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/*
 * Counter-backed generator. Codes are bijective base-26
 * words over 'a'..='z' : a, b, ..., z, aa, ab, ...
 * which keeps them usable as bare graphviz identifiers.
 */
#[derive(Debug, Default)]
pub struct SerialIds {
    next: AtomicU64,
}

impl SerialIds {
    pub fn new() -> SerialIds {
        SerialIds {next: AtomicU64::new(0)}
    }

    // Number of codes handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

pub fn encode(n: u64) -> String {
    let mut n = n + 1;
    let mut code = Vec::new();

    while n > 0 {
        n -= 1;
        code.push(b'a' + (n % 26) as u8);
        n /= 26;
    }

    code.reverse();
    // Only ASCII letters were pushed.
    code.into_iter().map(char::from).collect()
}

impl IdGenerator for SerialIds {
    fn next_id(&self) -> String {
        encode(self.next.fetch_add(1, Ordering::SeqCst))
    }
}
