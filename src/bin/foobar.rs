use foo_hello::cli::Foobar;

fn main() {
    foo_hello::runner::main::<Foobar>()
}
