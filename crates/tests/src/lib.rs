#[cfg(test)]
mod common;

#[cfg(test)]
mod lookup_tests;


#[cfg(test)]
mod submit_tests;

#[cfg(test)]
mod download_tests;

#[cfg(test)]
mod health_tests;
