//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `astral_core` linkage.
//! - Print today's sky, plus one weekly horoscope when a sign is passed.

use astral_core::{init_logging_from_config, AstroService, CoreConfig, SystemClock, ZodiacSign};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("astral_core logging disabled: {err}");
    }

    println!("astral_core ping={}", astral_core::ping());
    println!("astral_core version={}", astral_core::core_version());

    let service = AstroService::new(SystemClock);
    let sky = service.sky();
    println!(
        "sky date={} phase={} {} moon_sign={}",
        sky.date,
        sky.phase.symbol(),
        sky.phase.name(),
        sky.moon_sign.name()
    );

    let Some(raw_sign) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };
    let sign = match raw_sign.parse::<ZodiacSign>() {
        Ok(sign) => sign,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let horoscope = service.weekly_horoscope_for_sign(sign);
    println!(
        "horoscope sign={} week={} lucky_number={} lucky_color={} mood={}",
        horoscope.sign.name(),
        horoscope.week_of_year,
        horoscope.lucky_number,
        horoscope.lucky_color,
        horoscope.mood
    );
    println!("{}", horoscope.reading);
    ExitCode::SUCCESS
}
