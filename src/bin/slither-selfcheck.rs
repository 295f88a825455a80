// Slither self-check: runs the built-in ordering and skip suite.
// Usage: cargo run --bin slither-selfcheck -- [--color never] [--no-emoji] [--demo-failure]

fn main() {
    slither::cli::run();
}
