/// Binary entrypoint for the `linkgen` executable.
///
/// Keeps the binary thin; all business logic lives in the `linkgen_lib` crate
/// so unit tests can import library functions directly.
fn main() {
    linkgen_lib::run();
}
