//! Entry point for the WASM application

pub fn main() {
    iris_landing::start();
}
