use std::time::Instant;

/// Print how long a network round-trip took. Native builds only; the wasm
/// build has no useful stderr and the browser devtools already time requests.
#[inline]
pub fn log_perf(scope: &str, started_at: Instant, details: &str) {
    let elapsed_ms = started_at.elapsed().as_millis();
    if details.trim().is_empty() {
        eprintln!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        eprintln!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}
