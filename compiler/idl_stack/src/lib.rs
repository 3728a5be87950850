//! Stack growth for recursion that follows source nesting.
//!
//! Blocks, parenthesized lists and bracketed lists may nest as deeply as the
//! input does. The lexer's grouper, the parser's scope walk and the renderer
//! all recurse once per level, so each recursive step goes through
//! [`ensure_sufficient_stack`], which moves onto a freshly allocated segment
//! when the current one runs low.
//!
//! On `wasm32` the guard is a plain call.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nesting_depth(levels: u32) -> u32 {
        ensure_sufficient_stack(|| {
            if levels == 0 {
                0
            } else {
                // Padding keeps each frame large enough to need new segments.
                let frame = [levels; 64];
                nesting_depth(levels - 1) + 1 + frame[63] - levels
            }
        })
    }

    #[test]
    fn test_passes_result_through() {
        let result: Result<&str, u8> = ensure_sufficient_stack(|| Ok("block"));
        assert_eq!(result, Ok("block"));
    }

    #[test]
    fn test_recursion_beyond_one_segment() {
        // A thread stack this small cannot hold the recursion without growth.
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| nesting_depth(50_000));
        assert_eq!(handle.map(|h| h.join().ok()).ok().flatten(), Some(50_000));
    }
}
