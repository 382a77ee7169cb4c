pub(crate) mod cities;
pub(crate) mod countries;
pub(crate) mod error;
pub(crate) mod hotels;
pub(crate) mod search;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) use error::ApiError;
