#[cfg(test)]
mod kinds_tests;
#[cfg(test)]
mod list_tests;
