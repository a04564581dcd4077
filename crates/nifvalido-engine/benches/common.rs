// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn sample_inputs() -> Vec<&'static str> {
    vec![
        "12345678Z",
        "12345678",
        "12-345.678 z",
        "X1234567L",
        "y 1234567",
        "A58818501",
        "P2807900",
        "N0032484H",
        "12345678A",
        "M1234567",
        "",
        "not a nif at all",
    ]
}
