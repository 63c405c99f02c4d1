//! Shared test utilities for conversion testing

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Native path strings that contain no characters requiring percent-encoding,
/// across the interesting leading/trailing/drive shapes.
pub fn plain_native_corpus() -> Vec<&'static str> {
    vec![
        "",
        ".",
        "..",
        "./",
        "/",
        "//",
        "MyFile.ext",
        "some/path/MyFile.ext",
        "/some/path/MyFile.ext",
        "//some/path/MyFile.ext",
        "myProject/myFolder/",
        "resource/../some/dir/../../file.ext",
        "../resource/..",
    ]
}
