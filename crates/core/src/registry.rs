//! Static product table for Razer peripherals.
//!
//! Maps USB product IDs to a display name, a device class, and the
//! transaction ID the firmware expects in every request.

use serde::Serialize;

/// Razer USB Vendor ID.
pub const RAZER_VID: u16 = 0x1532;

/// Device class of a Razer product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mouse,
    Keyboard,
    Headset,
    Speaker,
    Mousepad,
    Accessory,
    Dongle,
    Unknown,
}

impl DeviceType {
    /// Lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mouse => "mouse",
            Self::Keyboard => "keyboard",
            Self::Headset => "headset",
            Self::Speaker => "speaker",
            Self::Mousepad => "mousepad",
            Self::Accessory => "accessory",
            Self::Dongle => "dongle",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display name for a product ID.
///
/// Unknown products get a synthesized `Unknown (PID: 0xNNNN)` label.
pub fn device_name(pid: u16) -> String {
    DEVICE_NAMES
        .iter()
        .find(|(p, _)| *p == pid)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("Unknown (PID: 0x{pid:04X})"))
}

/// Device class for a product ID, [`DeviceType::Unknown`] if not listed.
pub fn device_type(pid: u16) -> DeviceType {
    DEVICE_TYPES
        .iter()
        .find(|(p, _)| *p == pid)
        .map(|(_, ty)| *ty)
        .unwrap_or(DeviceType::Unknown)
}

/// Protocol transaction ID for a product ID, `0x00` if not listed.
pub fn transaction_id(pid: u16) -> u8 {
    TRANSACTION_IDS
        .iter()
        .find(|(p, _)| *p == pid)
        .map(|(_, id)| *id)
        .unwrap_or(0x00)
}

/// Whether the product ID is in the name table.
pub fn is_known(pid: u16) -> bool {
    DEVICE_NAMES.iter().any(|(p, _)| *p == pid)
}

pub fn is_mouse(pid: u16) -> bool {
    device_type(pid) == DeviceType::Mouse
}

pub fn is_keyboard(pid: u16) -> bool {
    device_type(pid) == DeviceType::Keyboard
}

static DEVICE_NAMES: &[(u16, &str)] = &[
    (0x0013, "Razer Orochi 2011"),
    (0x0015, "Razer Naga"),
    (0x0016, "Razer DeathAdder 3.5G"),
    (0x001F, "Razer Naga Epic"),
    (0x0020, "Razer Abyssus 1800"),
    (0x0024, "Razer Mamba 2012 (Wired)"),
    (0x0025, "Razer Mamba 2012 (Wireless)"),
    (0x0029, "Razer DeathAdder 3.5G Black"),
    (0x002E, "Razer Naga 2012"),
    (0x002F, "Razer Imperator 2012"),
    (0x0032, "Razer Ouroboros"),
    (0x0034, "Razer Taipan"),
    (0x0036, "Razer Naga Hex (Red)"),
    (0x0037, "Razer DeathAdder 2013"),
    (0x0038, "Razer DeathAdder 1800"),
    (0x0039, "Razer Orochi 2013"),
    (0x003E, "Razer Naga Epic Chroma (Wired)"),
    (0x003F, "Razer Naga Epic Chroma (Wireless)"),
    (0x0040, "Razer Naga 2014"),
    (0x0041, "Razer Naga Hex"),
    (0x0042, "Razer Abyssus"),
    (0x0043, "Razer DeathAdder Chroma"),
    (0x0044, "Razer Mamba Chroma (Wired)"),
    (0x0045, "Razer Mamba Chroma (Wireless)"),
    (0x0046, "Razer Mamba Tournament Edition"),
    (0x0048, "Razer Orochi (Wired)"),
    (0x004C, "Razer Diamondback Chroma"),
    (0x004F, "Razer DeathAdder 2000"),
    (0x0050, "Razer Naga Hex V2"),
    (0x0053, "Razer Naga Chroma"),
    (0x0054, "Razer DeathAdder 3500"),
    (0x0059, "Razer Lancehead (Wired)"),
    (0x005A, "Razer Lancehead (Wireless)"),
    (0x005B, "Razer Abyssus V2"),
    (0x005C, "Razer DeathAdder Elite"),
    (0x005E, "Razer Abyssus 2000"),
    (0x0060, "Razer Lancehead Tournament Edition"),
    (0x0062, "Razer Atheris (Receiver)"),
    (0x0064, "Razer Basilisk"),
    (0x0065, "Razer Basilisk Essential"),
    (0x0067, "Razer Naga Trinity"),
    (0x0068, "Razer Firefly Hyperflux (2018)"),
    (0x006A, "Razer Abyssus Elite (D.Va Edition)"),
    (0x006B, "Razer Abyssus Essential"),
    (0x006C, "Razer Mamba Elite"),
    (0x006E, "Razer DeathAdder Essential"),
    (0x006F, "Razer Lancehead Wireless (Receiver)"),
    (0x0070, "Razer Lancehead Wireless (Wired)"),
    (0x0071, "Razer DeathAdder Essential (White Edition)"),
    (0x0072, "Razer Mamba Wireless (Receiver)"),
    (0x0073, "Razer Mamba Wireless (Wired)"),
    (0x0077, "Razer Pro Click (Receiver)"),
    (0x0078, "Razer Viper"),
    (0x007A, "Razer Viper Ultimate (Wired)"),
    (0x007B, "Razer Viper Ultimate (Wireless)"),
    (0x007C, "Razer DeathAdder V2 Pro (Wired)"),
    (0x007D, "Razer DeathAdder V2 Pro (Wireless)"),
    (0x007E, "Razer Mouse Dock"),
    (0x0080, "Razer Pro Click (Wired)"),
    (0x0083, "Razer Basilisk X HyperSpeed"),
    (0x0084, "Razer DeathAdder V2"),
    (0x0085, "Razer Basilisk V2"),
    (0x0086, "Razer Basilisk Ultimate"),
    (0x0088, "Razer Basilisk Ultimate (Receiver)"),
    (0x008A, "Razer Viper Mini"),
    (0x008C, "Razer DeathAdder V2 Mini"),
    (0x008D, "Razer Naga Left Handed Edition 2020"),
    (0x008F, "Razer Naga Pro (Wired)"),
    (0x0090, "Razer Naga Pro (Wireless)"),
    (0x0091, "Razer Viper 8KHz"),
    (0x0094, "Razer Orochi V2 (Receiver)"),
    (0x0095, "Razer Orochi V2 (Bluetooth)"),
    (0x0096, "Razer Naga X"),
    (0x0098, "Razer DeathAdder Essential (2021)"),
    (0x0099, "Razer Basilisk V3"),
    (0x009A, "Razer Pro Click Mini (Receiver)"),
    (0x009C, "Razer DeathAdder V2 X HyperSpeed"),
    (0x009E, "Razer Viper Mini SE (Wired)"),
    (0x009F, "Razer Viper Mini SE (Wireless)"),
    (0x00A1, "Razer DeathAdder V2 Lite"),
    (0x00A3, "Razer Cobra"),
    (0x00A5, "Razer Viper V2 Pro (Wired)"),
    (0x00A6, "Razer Viper V2 Pro (Wireless)"),
    (0x00A7, "Razer Naga V2 Pro (Wired)"),
    (0x00A8, "Razer Naga V2 Pro (Wireless)"),
    (0x00AA, "Razer Basilisk V3 Pro (Wired)"),
    (0x00AB, "Razer Basilisk V3 Pro (Wireless)"),
    (0x00AF, "Razer Cobra Pro (Wired)"),
    (0x00B0, "Razer Cobra Pro (Wireless)"),
    (0x00B2, "Razer DeathAdder V3"),
    (0x00B3, "Razer HyperPolling Wireless Dongle"),
    (0x00B4, "Razer Naga V2 HyperSpeed (Receiver)"),
    (0x00B6, "Razer DeathAdder V3 Pro (Wired)"),
    (0x00B7, "Razer DeathAdder V3 Pro (Wireless)"),
    (0x00B8, "Razer Viper V3 HyperSpeed"),
    (0x00B9, "Razer Basilisk V3 X HyperSpeed"),
    (0x00BE, "Razer DeathAdder V4 Pro (Wired)"),
    (0x00BF, "Razer DeathAdder V4 Pro (Wireless)"),
    (0x00C0, "Razer Viper V3 Pro (Wired)"),
    (0x00C1, "Razer Viper V3 Pro (Wireless)"),
    (0x00C2, "Razer DeathAdder V3 Pro (Wired)"),
    (0x00C3, "Razer DeathAdder V3 Pro (Wireless)"),
    (0x00C4, "Razer DeathAdder V3 HyperSpeed (Wired)"),
    (0x00C5, "Razer DeathAdder V3 HyperSpeed (Wireless)"),
    (0x00C7, "Razer Pro Click V2 Vertical Edition (Wired)"),
    (0x00C8, "Razer Pro Click V2 Vertical Edition (Wireless)"),
    (0x00CB, "Razer Basilisk V3 35K"),
    (0x00CC, "Razer Basilisk V3 Pro 35K (Wired)"),
    (0x00CD, "Razer Basilisk V3 Pro 35K (Wireless)"),
    (0x00D0, "Razer Pro Click V2 (Wired)"),
    (0x00D1, "Razer Pro Click V2 (Wireless)"),
    (0x00D6, "Razer Basilisk V3 Pro 35K Phantom Green Edition (Wired)"),
    (0x00D7, "Razer Basilisk V3 Pro 35K Phantom Green Edition (Wireless)"),
    (0x010D, "Razer BlackWidow Ultimate 2012"),
    (0x010E, "Razer BlackWidow Stealth Edition"),
    (0x010F, "Razer Anansi"),
    (0x0111, "Razer Nostromo"),
    (0x0113, "Razer Orbweaver"),
    (0x0118, "Razer DeathStalker/DeathStalker Essential"),
    (0x011A, "Razer BlackWidow Ultimate 2013"),
    (0x011B, "Razer BlackWidow (Classic)"),
    (0x011C, "Razer BlackWidow Tournament Edition 2014"),
    (0x0201, "Razer Tartarus"),
    (0x0202, "Razer DeathStalker Expert"),
    (0x0203, "Razer BlackWidow Chroma"),
    (0x0204, "Razer DeathStalker Chroma"),
    (0x0205, "Razer Blade Stealth"),
    (0x0207, "Razer Orbweaver Chroma"),
    (0x0208, "Razer Tartarus Chroma"),
    (0x0209, "Razer BlackWidow Tournament Edition Chroma"),
    (0x020F, "Razer Blade (QHD)"),
    (0x0210, "Razer Blade Pro (Late 2016)"),
    (0x0211, "Razer BlackWidow Chroma (Overwatch)"),
    (0x0214, "Razer BlackWidow Ultimate 2016"),
    (0x0215, "Razer Core"),
    (0x0216, "Razer BlackWidow X Chroma"),
    (0x0217, "Razer BlackWidow X Ultimate"),
    (0x021A, "Razer BlackWidow X Tournament Edition Chroma"),
    (0x021E, "Razer Ornata Chroma"),
    (0x021F, "Razer Ornata"),
    (0x0220, "Razer Blade Stealth (Late 2016)"),
    (0x0221, "Razer BlackWidow Chroma V2"),
    (0x0224, "Razer Blade (Late 2016)"),
    (0x0225, "Razer Blade Pro (2017)"),
    (0x0226, "Razer Huntsman Elite"),
    (0x0227, "Razer Huntsman"),
    (0x0228, "Razer BlackWidow Elite"),
    (0x022A, "Razer Cynosa Chroma"),
    (0x022B, "Razer Tartarus V2"),
    (0x022C, "Razer Cynosa Chroma Pro"),
    (0x022D, "Razer Blade Stealth (Mid 2017)"),
    (0x022F, "Razer Blade Pro FullHD (2017)"),
    (0x0232, "Razer Blade Stealth (Late 2017)"),
    (0x0233, "Razer Blade 15 (2018)"),
    (0x0234, "Razer Blade Pro 17 (2019)"),
    (0x0235, "Razer BlackWidow Lite"),
    (0x0237, "Razer BlackWidow Essential"),
    (0x0239, "Razer Blade Stealth (2019)"),
    (0x023A, "Razer Blade 15 (2019) Advanced"),
    (0x023B, "Razer Blade 15 (2018) Base Model"),
    (0x023F, "Razer Cynosa Lite"),
    (0x0240, "Razer Blade 15 (2018) Mercury"),
    (0x0241, "Razer BlackWidow 2019"),
    (0x0243, "Razer Huntsman Tournament Edition"),
    (0x0244, "Razer Tartarus Pro"),
    (0x0245, "Razer Blade 15 (Mid 2019) Mercury"),
    (0x0246, "Razer Blade 15 (Mid 2019) Base Model"),
    (0x024A, "Razer Blade Stealth (Late 2019)"),
    (0x024B, "Razer Blade Advanced (Late 2019)"),
    (0x024C, "Razer Blade Pro (Late 2019)"),
    (0x024D, "Razer Blade 15 Studio Edition (2019)"),
    (0x024E, "Razer BlackWidow V3"),
    (0x0252, "Razer Blade Stealth (Early 2020)"),
    (0x0253, "Razer Blade 15 Advanced (2020)"),
    (0x0255, "Razer Blade Base (Early 2020)"),
    (0x0256, "Razer Blade Pro (Early 2020)"),
    (0x0257, "Razer Huntsman Mini"),
    (0x0258, "Razer BlackWidow V3 Mini HyperSpeed (Wired)"),
    (0x0259, "Razer Blade Stealth (Late 2020)"),
    (0x025A, "Razer BlackWidow V3 Pro Wired"),
    (0x025C, "Razer BlackWidow V3 Pro 2.4 Ghz Wireless"),
    (0x025D, "Razer Ornata V2"),
    (0x025E, "Razer Cynosa V2"),
    (0x0266, "Razer Huntsman V2 Analog"),
    (0x0268, "Razer Blade Late 2020 Base"),
    (0x0269, "Razer Huntsman Mini JP"),
    (0x026A, "Razer Book (2020)"),
    (0x026B, "Razer Huntsman V2 Tenkeyless"),
    (0x026C, "Razer Huntsman V2"),
    (0x026D, "Razer Blade 15 Advanced (Early 2021)"),
    (0x026E, "Razer Blade 17 Pro (Early 2021)"),
    (0x026F, "Razer Blade Base (Early 2021)"),
    (0x0270, "Razer Blade 14 (2021)"),
    (0x0271, "Razer BlackWidow V3 Mini HyperSpeed (Wireless)"),
    (0x0276, "Razer Blade 15 Advanced (Mid 2021)"),
    (0x0279, "Razer Blade 17 Pro (Mid 2021)"),
    (0x027A, "Razer Blade Base (Early 2022)"),
    (0x0282, "Razer Huntsman Mini Analog"),
    (0x0287, "Razer BlackWidow V4"),
    (0x028A, "Razer Blade 15 Advanced (Early 2022)"),
    (0x028B, "Razer Blade 17 (2022)"),
    (0x028C, "Razer Blade 14 (2022)"),
    (0x028D, "Razer BlackWidow V4 Pro"),
    (0x028F, "Razer Ornata V3 (Alternate)"),
    (0x0290, "Razer DeathStalker V2 Pro (Wireless)"),
    (0x0292, "Razer DeathStalker V2 Pro (Wired)"),
    (0x0293, "Razer BlackWidow V4 X"),
    (0x0294, "Razer Ornata V3 X"),
    (0x0295, "Razer DeathStalker V2"),
    (0x0296, "Razer DeathStalker V2 Pro TKL (Wireless)"),
    (0x0298, "Razer DeathStalker V2 Pro TKL (Wired)"),
    (0x029D, "Razer Blade 14 (2023)"),
    (0x029E, "Razer Blade 15 (2023)"),
    (0x029F, "Razer Blade 16 (2023)"),
    (0x02A0, "Razer Blade 18 (2023)"),
    (0x02A1, "Razer Ornata V3"),
    (0x02A2, "Razer Ornata V3 X (Alternate)"),
    (0x02A3, "Razer Ornata V3 Tenkeyless"),
    (0x02A5, "Razer BlackWidow V4 75%"),
    (0x02A6, "Razer Huntsman V3 Pro"),
    (0x02A7, "Razer Huntsman V3 Pro TKL"),
    (0x02B6, "Razer Blade 14 (2024)"),
    (0x02B8, "Razer Blade 18 (2024)"),
    (0x02B9, "Razer BlackWidow V4 Mini HyperSpeed (Wired)"),
    (0x02BA, "Razer BlackWidow V4 Mini HyperSpeed (Wireless)"),
    (0x02C5, "Razer Blade 14 (2025)"),
    (0x02C6, "Razer Blade 16 (2025)"),
    (0x02C7, "Razer Blade 18 (2025)"),
    (0x0501, "Razer Kraken 7.1"),
    (0x0504, "Razer Kraken 7.1 Chroma"),
    (0x0506, "Razer Kraken 7.1 (Alternate)"),
    (0x0510, "Razer Kraken 7.1 V2"),
    (0x0517, "Razer Nommo Chroma (Speakers)"),
    (0x0518, "Razer Nommo Pro (Speakers)"),
    (0x0527, "Razer Kraken Ultimate"),
    (0x0560, "Razer Kraken Kitty V2"),
    (0x0A24, "Razer BlackWidow V3 TK"),
    (0x0C00, "Razer Firefly (2013)"),
    (0x0C01, "Razer Goliathus (2018)"),
    (0x0C02, "Razer Goliathus Extended (2018)"),
    (0x0C04, "Razer Firefly V2"),
    (0x0C05, "Razer Strider Chroma"),
    (0x0C06, "Razer Goliathus Chroma 3XL"),
    (0x0C08, "Razer Firefly V2 Pro"),
    (0x0F07, "Razer Chroma Mug Holder"),
    (0x0F08, "Razer Base Station Chroma (Headphone Stand)"),
    (0x0F09, "Razer Chroma Hardware Development Kit (HDK)"),
    (0x0F0D, "Razer Laptop Stand Chroma"),
    (0x0F12, "Razer Raptor 27"),
    (0x0F17, "Razer Tomahawk ATX"),
    (0x0F19, "Razer Kraken Kitty Edition"),
    (0x0F1A, "Razer Core X Chroma"),
    (0x0F1D, "Razer Mouse Bungee V3 Chroma"),
    (0x0F1F, "Razer Chroma Addressable RGB Controller"),
    (0x0F20, "Razer Base Station V2 Chroma"),
    (0x0F21, "Razer Thunderbolt 4 Dock Chroma"),
    (0x0F26, "Razer Charging Pad Chroma"),
    (0x0A00, "Razer DeathAdder Chroma"),
    (0x0A01, "Razer Mamba Chroma"),
    (0x0A02, "Razer Cynosa Chroma"),
    (0x0A03, "Razer Tartarus Chroma"),
    (0x0F2B, "Razer Laptop Stand Chroma V2"),
];

static DEVICE_TYPES: &[(u16, DeviceType)] = &[
    (0x010D, DeviceType::Keyboard),
    (0x010E, DeviceType::Keyboard),
    (0x010F, DeviceType::Keyboard),
    (0x0111, DeviceType::Keyboard),
    (0x0113, DeviceType::Keyboard),
    (0x0118, DeviceType::Keyboard),
    (0x011A, DeviceType::Keyboard),
    (0x011B, DeviceType::Keyboard),
    (0x011C, DeviceType::Keyboard),
    (0x0201, DeviceType::Keyboard),
    (0x0202, DeviceType::Keyboard),
    (0x0203, DeviceType::Keyboard),
    (0x0204, DeviceType::Keyboard),
    (0x0205, DeviceType::Keyboard),
    (0x0207, DeviceType::Keyboard),
    (0x0208, DeviceType::Keyboard),
    (0x0209, DeviceType::Keyboard),
    (0x020F, DeviceType::Keyboard),
    (0x0210, DeviceType::Keyboard),
    (0x0211, DeviceType::Keyboard),
    (0x0214, DeviceType::Keyboard),
    (0x0216, DeviceType::Keyboard),
    (0x0217, DeviceType::Keyboard),
    (0x021A, DeviceType::Keyboard),
    (0x021E, DeviceType::Keyboard),
    (0x021F, DeviceType::Keyboard),
    (0x0220, DeviceType::Keyboard),
    (0x0221, DeviceType::Keyboard),
    (0x0224, DeviceType::Keyboard),
    (0x0225, DeviceType::Keyboard),
    (0x0226, DeviceType::Keyboard),
    (0x0227, DeviceType::Keyboard),
    (0x0228, DeviceType::Keyboard),
    (0x022A, DeviceType::Keyboard),
    (0x022B, DeviceType::Keyboard),
    (0x022C, DeviceType::Keyboard),
    (0x022D, DeviceType::Keyboard),
    (0x022F, DeviceType::Keyboard),
    (0x0232, DeviceType::Keyboard),
    (0x0233, DeviceType::Keyboard),
    (0x0234, DeviceType::Keyboard),
    (0x0235, DeviceType::Keyboard),
    (0x0237, DeviceType::Keyboard),
    (0x0239, DeviceType::Keyboard),
    (0x023A, DeviceType::Keyboard),
    (0x023B, DeviceType::Keyboard),
    (0x023F, DeviceType::Keyboard),
    (0x0240, DeviceType::Keyboard),
    (0x0241, DeviceType::Keyboard),
    (0x0243, DeviceType::Keyboard),
    (0x0244, DeviceType::Keyboard),
    (0x0245, DeviceType::Keyboard),
    (0x0246, DeviceType::Keyboard),
    (0x024A, DeviceType::Keyboard),
    (0x024B, DeviceType::Keyboard),
    (0x024C, DeviceType::Keyboard),
    (0x024D, DeviceType::Keyboard),
    (0x024E, DeviceType::Keyboard),
    (0x0252, DeviceType::Keyboard),
    (0x0253, DeviceType::Keyboard),
    (0x0255, DeviceType::Keyboard),
    (0x0256, DeviceType::Keyboard),
    (0x0257, DeviceType::Keyboard),
    (0x0258, DeviceType::Keyboard),
    (0x0259, DeviceType::Keyboard),
    (0x025A, DeviceType::Keyboard),
    (0x025C, DeviceType::Keyboard),
    (0x025D, DeviceType::Keyboard),
    (0x025E, DeviceType::Keyboard),
    (0x0266, DeviceType::Keyboard),
    (0x0268, DeviceType::Keyboard),
    (0x0269, DeviceType::Keyboard),
    (0x026A, DeviceType::Keyboard),
    (0x026B, DeviceType::Keyboard),
    (0x026C, DeviceType::Keyboard),
    (0x026D, DeviceType::Keyboard),
    (0x026E, DeviceType::Keyboard),
    (0x026F, DeviceType::Keyboard),
    (0x0270, DeviceType::Keyboard),
    (0x0271, DeviceType::Keyboard),
    (0x0276, DeviceType::Keyboard),
    (0x0279, DeviceType::Keyboard),
    (0x027A, DeviceType::Keyboard),
    (0x0282, DeviceType::Keyboard),
    (0x0287, DeviceType::Keyboard),
    (0x028A, DeviceType::Keyboard),
    (0x028B, DeviceType::Keyboard),
    (0x028C, DeviceType::Keyboard),
    (0x028D, DeviceType::Keyboard),
    (0x028F, DeviceType::Keyboard),
    (0x0290, DeviceType::Keyboard),
    (0x0292, DeviceType::Keyboard),
    (0x0293, DeviceType::Keyboard),
    (0x0294, DeviceType::Keyboard),
    (0x0295, DeviceType::Keyboard),
    (0x0296, DeviceType::Keyboard),
    (0x0298, DeviceType::Keyboard),
    (0x029D, DeviceType::Keyboard),
    (0x029E, DeviceType::Keyboard),
    (0x029F, DeviceType::Keyboard),
    (0x02A0, DeviceType::Keyboard),
    (0x02A1, DeviceType::Keyboard),
    (0x02A2, DeviceType::Keyboard),
    (0x02A3, DeviceType::Keyboard),
    (0x02A5, DeviceType::Keyboard),
    (0x02A6, DeviceType::Keyboard),
    (0x02A7, DeviceType::Keyboard),
    (0x02B6, DeviceType::Keyboard),
    (0x02B8, DeviceType::Keyboard),
    (0x02B9, DeviceType::Keyboard),
    (0x02BA, DeviceType::Keyboard),
    (0x02C5, DeviceType::Keyboard),
    (0x02C6, DeviceType::Keyboard),
    (0x02C7, DeviceType::Keyboard),
    (0x0A24, DeviceType::Keyboard),
    (0x0A00, DeviceType::Mouse),
    (0x0A01, DeviceType::Mouse),
    (0x0A02, DeviceType::Keyboard),
    (0x0A03, DeviceType::Keyboard),
    (0x0013, DeviceType::Mouse),
    (0x0015, DeviceType::Mouse),
    (0x0016, DeviceType::Mouse),
    (0x001F, DeviceType::Mouse),
    (0x0020, DeviceType::Mouse),
    (0x0024, DeviceType::Mouse),
    (0x0025, DeviceType::Mouse),
    (0x0029, DeviceType::Mouse),
    (0x002E, DeviceType::Mouse),
    (0x002F, DeviceType::Mouse),
    (0x0032, DeviceType::Mouse),
    (0x0034, DeviceType::Mouse),
    (0x0036, DeviceType::Mouse),
    (0x0037, DeviceType::Mouse),
    (0x0038, DeviceType::Mouse),
    (0x0039, DeviceType::Mouse),
    (0x003E, DeviceType::Mouse),
    (0x003F, DeviceType::Mouse),
    (0x0040, DeviceType::Mouse),
    (0x0041, DeviceType::Mouse),
    (0x0042, DeviceType::Mouse),
    (0x0043, DeviceType::Mouse),
    (0x0044, DeviceType::Mouse),
    (0x0045, DeviceType::Mouse),
    (0x0046, DeviceType::Mouse),
    (0x0048, DeviceType::Mouse),
    (0x004C, DeviceType::Mouse),
    (0x004F, DeviceType::Mouse),
    (0x0050, DeviceType::Mouse),
    (0x0053, DeviceType::Mouse),
    (0x0054, DeviceType::Mouse),
    (0x0059, DeviceType::Mouse),
    (0x005A, DeviceType::Mouse),
    (0x005B, DeviceType::Mouse),
    (0x005C, DeviceType::Mouse),
    (0x005E, DeviceType::Mouse),
    (0x0060, DeviceType::Mouse),
    (0x0062, DeviceType::Mouse),
    (0x0064, DeviceType::Mouse),
    (0x0065, DeviceType::Mouse),
    (0x0067, DeviceType::Mouse),
    (0x006A, DeviceType::Mouse),
    (0x006B, DeviceType::Mouse),
    (0x006C, DeviceType::Mouse),
    (0x006E, DeviceType::Mouse),
    (0x006F, DeviceType::Mouse),
    (0x0070, DeviceType::Mouse),
    (0x0071, DeviceType::Mouse),
    (0x0072, DeviceType::Mouse),
    (0x0073, DeviceType::Mouse),
    (0x0077, DeviceType::Mouse),
    (0x0078, DeviceType::Mouse),
    (0x007A, DeviceType::Mouse),
    (0x007B, DeviceType::Mouse),
    (0x007C, DeviceType::Mouse),
    (0x007D, DeviceType::Mouse),
    (0x0080, DeviceType::Mouse),
    (0x0083, DeviceType::Mouse),
    (0x0084, DeviceType::Mouse),
    (0x0085, DeviceType::Mouse),
    (0x0086, DeviceType::Mouse),
    (0x0088, DeviceType::Mouse),
    (0x008A, DeviceType::Mouse),
    (0x008C, DeviceType::Mouse),
    (0x008D, DeviceType::Mouse),
    (0x008F, DeviceType::Mouse),
    (0x0090, DeviceType::Mouse),
    (0x0091, DeviceType::Mouse),
    (0x0094, DeviceType::Mouse),
    (0x0095, DeviceType::Mouse),
    (0x0096, DeviceType::Mouse),
    (0x0098, DeviceType::Mouse),
    (0x0099, DeviceType::Mouse),
    (0x009A, DeviceType::Mouse),
    (0x009C, DeviceType::Mouse),
    (0x009E, DeviceType::Mouse),
    (0x009F, DeviceType::Mouse),
    (0x00A1, DeviceType::Mouse),
    (0x00A3, DeviceType::Mouse),
    (0x00A5, DeviceType::Mouse),
    (0x00A6, DeviceType::Mouse),
    (0x00A7, DeviceType::Mouse),
    (0x00A8, DeviceType::Mouse),
    (0x00AA, DeviceType::Mouse),
    (0x00AB, DeviceType::Mouse),
    (0x00AF, DeviceType::Mouse),
    (0x00B0, DeviceType::Mouse),
    (0x00B2, DeviceType::Mouse),
    (0x00B3, DeviceType::Dongle),
    (0x00B4, DeviceType::Mouse),
    (0x00B6, DeviceType::Mouse),
    (0x00B7, DeviceType::Mouse),
    (0x00B8, DeviceType::Mouse),
    (0x00B9, DeviceType::Mouse),
    (0x00BE, DeviceType::Mouse),
    (0x00BF, DeviceType::Mouse),
    (0x00C0, DeviceType::Mouse),
    (0x00C1, DeviceType::Mouse),
    (0x00C2, DeviceType::Mouse),
    (0x00C3, DeviceType::Mouse),
    (0x00C4, DeviceType::Mouse),
    (0x00C5, DeviceType::Mouse),
    (0x00C7, DeviceType::Mouse),
    (0x00C8, DeviceType::Mouse),
    (0x00CB, DeviceType::Mouse),
    (0x00CC, DeviceType::Mouse),
    (0x00CD, DeviceType::Mouse),
    (0x00D0, DeviceType::Mouse),
    (0x00D1, DeviceType::Mouse),
    (0x00D6, DeviceType::Mouse),
    (0x00D7, DeviceType::Mouse),
    (0x0068, DeviceType::Mousepad),
    (0x0C00, DeviceType::Mousepad),
    (0x0C01, DeviceType::Mousepad),
    (0x0C02, DeviceType::Mousepad),
    (0x0C04, DeviceType::Mousepad),
    (0x0C05, DeviceType::Mousepad),
    (0x0C06, DeviceType::Mousepad),
    (0x0C08, DeviceType::Mousepad),
    (0x0501, DeviceType::Headset),
    (0x0504, DeviceType::Headset),
    (0x0506, DeviceType::Headset),
    (0x0510, DeviceType::Headset),
    (0x0527, DeviceType::Headset),
    (0x0560, DeviceType::Headset),
    (0x0F19, DeviceType::Headset),
    (0x0517, DeviceType::Speaker),
    (0x0518, DeviceType::Speaker),
    (0x007E, DeviceType::Accessory),
    (0x0215, DeviceType::Accessory),
    (0x0F07, DeviceType::Accessory),
    (0x0F08, DeviceType::Accessory),
    (0x0F09, DeviceType::Accessory),
    (0x0F0D, DeviceType::Accessory),
    (0x0F12, DeviceType::Accessory),
    (0x0F17, DeviceType::Accessory),
    (0x0F1A, DeviceType::Accessory),
    (0x0F1D, DeviceType::Accessory),
    (0x0F1F, DeviceType::Accessory),
    (0x0F20, DeviceType::Accessory),
    (0x0F21, DeviceType::Accessory),
    (0x0F26, DeviceType::Accessory),
    (0x0F2B, DeviceType::Accessory),
];

// Products without an entry (mousepads, headsets, most accessories) fall back to 0x00.
static TRANSACTION_IDS: &[(u16, u8)] = &[
    (0x0013, 0xFF),
    (0x0015, 0x3F),
    (0x0016, 0x3F),
    (0x001F, 0x3F),
    (0x0020, 0x3F),
    (0x0024, 0x3F),
    (0x0025, 0x3F),
    (0x0029, 0x3F),
    (0x002E, 0x3F),
    (0x002F, 0x3F),
    (0x0032, 0x3F),
    (0x0034, 0x3F),
    (0x0036, 0x3F),
    (0x0037, 0x3F),
    (0x0038, 0x3F),
    (0x0039, 0x3F),
    (0x003E, 0x3F),
    (0x003F, 0x3F),
    (0x0040, 0xFF),
    (0x0041, 0x3F),
    (0x0042, 0x3F),
    (0x0043, 0x3F),
    (0x0044, 0x3F),
    (0x0045, 0x3F),
    (0x0046, 0x3F),
    (0x0048, 0x3F),
    (0x004C, 0x3F),
    (0x004F, 0x3F),
    (0x0050, 0x3F),
    (0x0053, 0x3F),
    (0x0054, 0x3F),
    (0x0059, 0x3F),
    (0x005A, 0x3F),
    (0x005B, 0x3F),
    (0x005C, 0x3F),
    (0x005E, 0x3F),
    (0x0060, 0x3F),
    (0x0062, 0x1F),
    (0x0064, 0x3F),
    (0x0065, 0x3F),
    (0x0067, 0x1F),
    (0x006A, 0x3F),
    (0x006B, 0x3F),
    (0x006C, 0x1F),
    (0x006E, 0x3F),
    (0x006F, 0x1F),
    (0x0070, 0x1F),
    (0x0071, 0x3F),
    (0x0072, 0x3F),
    (0x0073, 0x3F),
    (0x0077, 0x1F),
    (0x0078, 0x3F),
    (0x007A, 0x3F),
    (0x007B, 0x3F),
    (0x007C, 0x3F),
    (0x007D, 0x3F),
    (0x0080, 0x1F),
    (0x0083, 0xFF),
    (0x0084, 0x3F),
    (0x0085, 0x1F),
    (0x0086, 0x1F),
    (0x0088, 0x1F),
    (0x008A, 0x3F),
    (0x008C, 0x3F),
    (0x008D, 0x1F),
    (0x008F, 0x1F),
    (0x0090, 0x1F),
    (0x0091, 0x1F),
    (0x0094, 0x1F),
    (0x0095, 0x1F),
    (0x0096, 0x1F),
    (0x0098, 0x3F),
    (0x0099, 0x1F),
    (0x009A, 0x1F),
    (0x009C, 0x1F),
    (0x009E, 0x1F),
    (0x009F, 0x1F),
    (0x00A1, 0x1F),
    (0x00A3, 0x1F),
    (0x00A5, 0x1F),
    (0x00A6, 0x1F),
    (0x00A7, 0x1F),
    (0x00A8, 0x1F),
    (0x00AA, 0x1F),
    (0x00AB, 0x1F),
    (0x00AF, 0x1F),
    (0x00B0, 0x1F),
    (0x00B2, 0x1F),
    (0x00B3, 0x1F),
    (0x00B4, 0x1F),
    (0x00B6, 0x1F),
    (0x00B7, 0x1F),
    (0x00B8, 0x1F),
    (0x00B9, 0x1F),
    (0x00BE, 0x1F),
    (0x00BF, 0x1F),
    (0x00C0, 0x1F),
    (0x00C1, 0x1F),
    (0x00C2, 0x1F),
    (0x00C3, 0x1F),
    (0x00C4, 0x1F),
    (0x00C5, 0x1F),
    (0x00C7, 0x1F),
    (0x00C8, 0x1F),
    (0x00CB, 0x1F),
    (0x00CC, 0x1F),
    (0x00CD, 0x1F),
    (0x00D0, 0x1F),
    (0x00D1, 0x1F),
    (0x00D6, 0x1F),
    (0x00D7, 0x1F),
    (0x010D, 0xFF),
    (0x010E, 0xFF),
    (0x010F, 0xFF),
    (0x0111, 0xFF),
    (0x0113, 0xFF),
    (0x0118, 0xFF),
    (0x011A, 0xFF),
    (0x011B, 0xFF),
    (0x011C, 0xFF),
    (0x0201, 0xFF),
    (0x0202, 0xFF),
    (0x0203, 0xFF),
    (0x0204, 0xFF),
    (0x0205, 0xFF),
    (0x0207, 0x3F),
    (0x0208, 0xFF),
    (0x0209, 0xFF),
    (0x020F, 0xFF),
    (0x0210, 0xFF),
    (0x0211, 0xFF),
    (0x0214, 0xFF),
    (0x0216, 0xFF),
    (0x0217, 0xFF),
    (0x021A, 0xFF),
    (0x021E, 0x3F),
    (0x021F, 0x3F),
    (0x0220, 0xFF),
    (0x0221, 0x3F),
    (0x0224, 0x3F),
    (0x0225, 0xFF),
    (0x0226, 0x3F),
    (0x0227, 0x3F),
    (0x0228, 0x1F),
    (0x022A, 0x3F),
    (0x022B, 0x1F),
    (0x022C, 0x3F),
    (0x022D, 0xFF),
    (0x022F, 0xFF),
    (0x0232, 0xFF),
    (0x0233, 0xFF),
    (0x0234, 0xFF),
    (0x0235, 0x3F),
    (0x0237, 0x3F),
    (0x0239, 0xFF),
    (0x023A, 0xFF),
    (0x023B, 0xFF),
    (0x023F, 0x3F),
    (0x0240, 0xFF),
    (0x0241, 0x3F),
    (0x0243, 0x3F),
    (0x0244, 0x1F),
    (0x0245, 0xFF),
    (0x0246, 0xFF),
    (0x024A, 0xFF),
    (0x024B, 0xFF),
    (0x024C, 0xFF),
    (0x024D, 0xFF),
    (0x024E, 0x1F),
    (0x0252, 0xFF),
    (0x0253, 0xFF),
    (0x0255, 0xFF),
    (0x0256, 0xFF),
    (0x0257, 0x3F),
    (0x0258, 0x1F),
    (0x0259, 0xFF),
    (0x025A, 0x1F),
    (0x025C, 0x9F),
    (0x025D, 0x1F),
    (0x025E, 0x1F),
    (0x0266, 0x1F),
    (0x0268, 0xFF),
    (0x0269, 0x3F),
    (0x026A, 0xFF),
    (0x026B, 0x1F),
    (0x026C, 0x1F),
    (0x026D, 0xFF),
    (0x026E, 0xFF),
    (0x026F, 0xFF),
    (0x0270, 0xFF),
    (0x0271, 0x9F),
    (0x0276, 0xFF),
    (0x0279, 0xFF),
    (0x027A, 0x1F),
    (0x0282, 0x1F),
    (0x0287, 0x1F),
    (0x028A, 0xFF),
    (0x028B, 0xFF),
    (0x028C, 0xFF),
    (0x028D, 0x1F),
    (0x028F, 0x1F),
    (0x0290, 0x9F),
    (0x0292, 0x1F),
    (0x0293, 0x1F),
    (0x0294, 0x1F),
    (0x0295, 0x1F),
    (0x0296, 0x9F),
    (0x0298, 0x1F),
    (0x029D, 0xFF),
    (0x029E, 0xFF),
    (0x029F, 0xFF),
    (0x02A0, 0xFF),
    (0x02A1, 0x1F),
    (0x02A2, 0x1F),
    (0x02A3, 0x1F),
    (0x02A5, 0x1F),
    (0x02A6, 0x1F),
    (0x02A7, 0x1F),
    (0x02B6, 0xFF),
    (0x02B8, 0xFF),
    (0x02B9, 0x1F),
    (0x02BA, 0x9F),
    (0x02C5, 0xFF),
    (0x02C6, 0xFF),
    (0x02C7, 0xFF),
    (0x0A00, 0x1F),
    (0x0A01, 0x1F),
    (0x0A02, 0x3F),
    (0x0A03, 0x3F),
    (0x0A24, 0x1F),
];
