//! Mock collaborators for the UART.


/// Mock output sink.
pub mod sink;
