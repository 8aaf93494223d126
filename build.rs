fn main() {
    // Linker setup for the Node addon only; plain rlib/test builds skip it.
    if std::env::var_os("CARGO_FEATURE_NODE").is_some() {
        napi_build::setup();
    }
}
