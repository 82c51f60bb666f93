//! Entry point for the WASM application

pub fn main() {
    luova_frontend::boot();
}
