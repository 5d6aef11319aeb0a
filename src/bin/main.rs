#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use core::fmt::Write as _;

use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use embedded_hal::delay::DelayNs;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
    spi::master::Spi,
    time::Rate,
    timer::timg::TimerGroup,
};
use heapless::String as HeaplessString;
use log::{LevelFilter, info};
use st7735r::{Config as PanelConfig, St7735};
use tftwrap_core::{Color, GlyphGrid, Orientation, PrintError, PrintReport, Printer};
use tftwrap_hal::platform::display::TftDisplay;

const DEMO_MESSAGE: &str =
    "This is a long string that will wrap with the display to fit if possible.";
const DEMO_STEP_SECS: u64 = 1;
const HEARTBEAT_SECS: u64 = 5;
const HEARTBEAT_BYTES: usize = 48;

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

fn log_print<E: core::fmt::Debug>(step: &str, result: Result<PrintReport, PrintError<E>>) {
    match result {
        Ok(report) => info!(
            "demo: {} lines={} glyphs={} dropped={}",
            step, report.lines_drawn, report.glyphs_drawn, report.bytes_dropped
        ),
        Err(err) => info!("demo: {} failed: {:?}", step, err),
    }
}

async fn run_demo<G>(printer: &mut Printer<G>)
where
    G: GlyphGrid,
    G::Error: core::fmt::Debug,
{
    log_print("print", printer.print(DEMO_MESSAGE));
    Timer::after_secs(DEMO_STEP_SECS).await;

    log_print(
        "print_color",
        printer.print_color(Color::RED, Color::GREEN, DEMO_MESSAGE),
    );
    Timer::after_secs(DEMO_STEP_SECS).await;

    log_print("print_size", printer.print_size(DEMO_MESSAGE, 2));
    Timer::after_secs(DEMO_STEP_SECS).await;

    log_print(
        "print_both",
        printer.print_both(Color::YELLOW, Color::BLUE, DEMO_MESSAGE, 3),
    );
    Timer::after_secs(DEMO_STEP_SECS).await;

    log_print(
        "print_all",
        printer.print_all(
            Orientation::Portrait,
            Color::WHITE,
            Color::BLACK,
            DEMO_MESSAGE,
            2,
        ),
    );
    Timer::after_secs(DEMO_STEP_SECS).await;

    log_print("print_remembered", printer.print(DEMO_MESSAGE));
    Timer::after_secs(DEMO_STEP_SECS).await;
}

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: tftwrap starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Wiring used by this demo:
    // SCK=GPIO12, MOSI=GPIO11, CS=GPIO10, DC=GPIO9, RST=GPIO8
    let cs = Output::new(peripherals.GPIO10, Level::High, OutputConfig::default());
    let dc = Output::new(peripherals.GPIO9, Level::Low, OutputConfig::default());
    let mut rst = Output::new(peripherals.GPIO8, Level::High, OutputConfig::default());

    let panel_config = PanelConfig::default();
    let spi_config = esp_hal::spi::master::Config::default()
        .with_frequency(Rate::from_hz(panel_config.spi_hz))
        .with_mode(esp_hal::spi::Mode::_0);

    let spi = Spi::new(peripherals.SPI2, spi_config)
        .unwrap()
        .with_sck(peripherals.GPIO12)
        .with_mosi(peripherals.GPIO11);
    let spi = ExclusiveDevice::new(spi, cs, Delay::new()).unwrap();

    let mut delay = Delay::new();

    // Hardware reset pulse before the software init sequence.
    rst.set_low();
    delay.delay_ms(10);
    rst.set_high();
    delay.delay_ms(120);

    let mut display = TftDisplay::new(St7735::new(spi, dc, panel_config));
    esp_println::println!("display: init begin (SCK=12 MOSI=11 CS=10 DC=9 RST=8)");
    if let Err(err) = display.initialize(&mut delay) {
        esp_println::println!("display: initialize failed");
        info!("display initialize failed: {:?}", err);
    } else {
        esp_println::println!("display: initialize ok");
    }

    let mut printer = Printer::new(display);
    run_demo(&mut printer).await;
    esp_println::println!("demo: sequence complete");

    let mut heartbeat: HeaplessString<HEARTBEAT_BYTES> = HeaplessString::new();
    loop {
        heartbeat.clear();
        if write!(heartbeat, "tftwrap alive, uptime {}s", Instant::now().as_secs()).is_err() {
            info!("heartbeat: message truncated");
        }

        if let Err(err) = printer.print(&heartbeat) {
            info!("heartbeat: print failed: {:?}", err);
        }

        Timer::after_secs(HEARTBEAT_SECS).await;
    }
}
