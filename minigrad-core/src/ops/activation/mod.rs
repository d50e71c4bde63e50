// Activation functions
pub mod tanh;
