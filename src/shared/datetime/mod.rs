pub mod interval;

#[cfg(test)]
mod interval_test;
