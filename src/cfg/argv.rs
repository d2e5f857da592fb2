// cfg/argv.rs

//! # Command Line Level Loading
//!
//! Picks `LOGSPEC_LEVEL=<levels>` arguments out of a program's argument
//! list, e.g. `./server LOGSPEC_LEVEL=net=debug,warn`.

use crate::app::ARGV_LEVEL_PREFIX;
use crate::cfg::env::assignment_from;
use crate::registry::LevelSink;

/// Applies every `LOGSPEC_LEVEL=` argument to `sink`, in order.
///
/// The first element is taken to be the program name and is skipped.
/// Returns the number of arguments applied.
pub fn load_argv_levels<I, A, S>(args: I, sink: &mut S) -> usize
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
    S: LevelSink + ?Sized,
{
    let mut applied = 0;
    for arg in args.into_iter().skip(1) {
        if let Some(levels) = arg.as_ref().strip_prefix(ARGV_LEVEL_PREFIX) {
            sink.apply_levels(assignment_from("argv", levels));
            applied += 1;
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::registry::Registry;

    #[test]
    fn test_load_argv_levels() {
        let registry = Registry::new();
        let args = ["server", "--port", "80", "LOGSPEC_LEVEL=net=debug,warn"];
        assert_eq!(load_argv_levels(args, &mut &registry), 1);
        assert_eq!(registry.level_for("net"), Level::Debug);
        assert_eq!(registry.default_level(), Level::Warn);
    }

    #[test]
    fn test_program_name_is_skipped() {
        let registry = Registry::new();
        let args = vec!["LOGSPEC_LEVEL=off".to_string()];
        assert_eq!(load_argv_levels(args, &mut &registry), 0);
        assert_eq!(registry.default_level(), Level::Info);
    }

    #[test]
    fn test_prefix_must_start_the_argument() {
        let registry = Registry::new();
        let args = ["server", "--LOGSPEC_LEVEL=off", "XLOGSPEC_LEVEL=off"];
        assert_eq!(load_argv_levels(args, &mut &registry), 0);
        assert_eq!(registry.default_level(), Level::Info);
    }

    #[test]
    fn test_later_arguments_replace_earlier_ones() {
        let registry = Registry::new();
        let args = ["server", "LOGSPEC_LEVEL=a=trace", "LOGSPEC_LEVEL=b=error"];
        assert_eq!(load_argv_levels(args, &mut &registry), 2);
        assert_eq!(registry.level_for("a"), Level::Info);
        assert_eq!(registry.level_for("b"), Level::Error);
    }
}
