/// Run `op` up to `max_attempts` times, returning the first success.
///
/// Retries happen immediately, with no backoff. `on_failed_attempt` observes
/// every failed attempt except the final one, which is returned to the caller
/// as-is; the callback carries the attempt number (1-based) and the error.
pub fn retry_with<T, E>(
    max_attempts: usize,
    mut op: impl FnMut() -> Result<T, E>,
    mut on_failed_attempt: impl FnMut(usize, &E),
) -> Result<T, E> {
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                on_failed_attempt(attempt, &err);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
