use mockall::mock;
use uartsim_core::soc::devices::uart::OutputSink;

mock! {
    pub Sink {}
    impl OutputSink for Sink {
        fn write_byte(&mut self, byte: u8);
        fn flush(&mut self);
    }
}
