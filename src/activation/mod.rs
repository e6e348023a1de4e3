pub mod heaviside;
