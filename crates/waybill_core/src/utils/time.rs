/// Evaluates `$block` and logs the wall-clock time it took under `step`.
#[macro_export]
macro_rules! timer_debug {
    ($step:literal, $block:expr) => {{
        let started_at = jiff::Timestamp::now();
        let value = $block;
        let elapsed = jiff::Timestamp::now().duration_since(started_at);

        tracing::debug!(step = $step, %elapsed, "Step finished");

        value
    }};
}
