use foo_hello::cli::Helloworld;

fn main() {
    foo_hello::runner::main::<Helloworld>()
}
