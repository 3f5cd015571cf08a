#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod employee_tests;

#[cfg(test)]
mod product_tests;

#[cfg(test)]
mod section_tests;

#[cfg(test)]
mod receipt_tests;

#[cfg(test)]
mod point_of_sale_tests;
