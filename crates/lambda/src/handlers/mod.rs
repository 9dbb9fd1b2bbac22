pub mod ses;
pub mod smtp;

#[cfg(test)]
pub(crate) mod test_support;
