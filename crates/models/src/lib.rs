pub mod errors;
pub mod db;
pub mod empleado;

#[cfg(test)]
mod tests;
