use foo_hello::cli::Foobaz;

fn main() {
    foo_hello::runner::main::<Foobaz>()
}
