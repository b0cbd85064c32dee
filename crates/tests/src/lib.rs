#[cfg(test)]
mod common;

#[cfg(test)]
mod doctor_list_tests;

#[cfg(test)]
mod doctor_get_tests;

#[cfg(test)]
mod api_error_tests;
