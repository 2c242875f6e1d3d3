/// Tree inspection command.
pub mod inspect;
/// Value printing helpers.
pub mod print;
/// Step plan execution command.
pub mod run;
#[cfg(test)]
pub(crate) mod test_support;
/// Shared command helpers.
pub(crate) mod util;
