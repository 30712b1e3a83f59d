mod interval;
mod matrix;
