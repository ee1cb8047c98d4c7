mod arithmetic;
mod comparison;
mod construct;
mod format;
mod json;
mod projection;
