use uartsim_core::config::UartConfig;
use uartsim_core::soc::devices::uart::SharedBufferSink;
use uartsim_core::Uart;

/// An initialized UART whose console output is captured.
pub struct TestUart {
    pub uart: Uart,
    pub console: SharedBufferSink,
}

impl Default for TestUart {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUart {
    /// Initialized UART with an empty receive FIFO.
    pub fn new() -> Self {
        Self::with_preload(b"")
    }

    /// Initialized UART whose receive FIFO was preloaded with `preload`.
    pub fn with_preload(preload: &[u8]) -> Self {
        let console = SharedBufferSink::new();
        let mut uart = Uart::detached(&UartConfig::default()).with_sink(Box::new(console.clone()));
        uart.set_preload(preload);
        uart.initialize();
        Self { uart, console }
    }

    /// Reads a register.
    pub fn read(&mut self, offset: u8) -> u8 {
        self.uart.read_reg(offset)
    }

    /// Writes a register.
    pub fn write(&mut self, offset: u8, val: u8) {
        self.uart.write_reg(offset, val);
    }
}

/// Initialized UART with no sink, so transmitted bytes stay queued.
pub fn detached_uart() -> Uart {
    let mut uart = Uart::detached(&UartConfig::default());
    uart.initialize();
    uart
}
