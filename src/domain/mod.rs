// Domain layer: contact-form models and the ports the text core is written against.

pub mod model;
pub mod ports;
