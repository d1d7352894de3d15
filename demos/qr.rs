use qrcode::QrCode;

use std::io::Write;

fn main() -> anyhow::Result<()> {
    let input = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: qr <text>"))?;
    let encoded = base45::encode(input.as_bytes());
    // base45 output only uses alphanumeric mode symbols
    let code = QrCode::new(encoded.as_bytes())?;
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();
    let mut stdout = std::io::stdout();
    stdout.write_all(format!("{string}\n").as_bytes())?;
    stdout.write_all(format!("{encoded}\n").as_bytes())?;
    stdout.flush()?;
    Ok(())
}
