/// Evaluates a block and returns `(result, elapsed)`.
#[macro_export]
macro_rules! measure_time {
    ($block:block) => {{
        let start = std::time::Instant::now();
        let result = $block;
        (result, start.elapsed())
    }};
}
