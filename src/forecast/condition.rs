// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;

/// A sky condition, as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Condition {
    Clear,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Overcast,
    Foggy,
    Drizzle,
    #[serde(rename = "Freezing Drizzle")]
    FreezingDrizzle,
    Rain,
    #[serde(rename = "Freezing Rain")]
    FreezingRain,
    Snow,
    #[serde(rename = "Snow Grains")]
    SnowGrains,
    #[serde(rename = "Rain Showers")]
    RainShowers,
    #[serde(rename = "Snow Showers")]
    SnowShowers,
    Thunderstorm,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Overcast => "Overcast",
            Condition::Foggy => "Foggy",
            Condition::Drizzle => "Drizzle",
            Condition::FreezingDrizzle => "Freezing Drizzle",
            Condition::Rain => "Rain",
            Condition::FreezingRain => "Freezing Rain",
            Condition::Snow => "Snow",
            Condition::SnowGrains => "Snow Grains",
            Condition::RainShowers => "Rain Showers",
            Condition::SnowShowers => "Snow Showers",
            Condition::Thunderstorm => "Thunderstorm",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Condition::Clear => "☀️",
            Condition::PartlyCloudy => "🌤️",
            Condition::Overcast => "☁️",
            Condition::Foggy => "🌫️",
            Condition::Drizzle => "🌦️",
            Condition::FreezingDrizzle => "🌨️",
            Condition::Rain => "🌧️",
            Condition::FreezingRain => "🌨️",
            Condition::Snow => "❄️",
            Condition::SnowGrains => "🌨️",
            Condition::RainShowers => "🌧️",
            Condition::SnowShowers => "❄️",
            Condition::Thunderstorm => "⛈️",
        }
    }
}

/// What a WMO weather code means for tomorrow morning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outlook {
    pub condition: Condition,
    pub tip: &'static str,
}

impl Outlook {
    pub fn emoji(&self) -> &'static str {
        self.condition.emoji()
    }
}

/// WMO codes sharing one outlook.
struct Band {
    codes: &'static [i64],
    outlook: Outlook,
}

const fn band(codes: &'static [i64], condition: Condition, tip: &'static str) -> Band {
    Band {
        codes,
        outlook: Outlook { condition, tip },
    }
}

const BANDS: [Band; 13] = [
    band(
        &[0],
        Condition::Clear,
        "Clear skies mean easy travel—stick to your usual routine.",
    ),
    band(
        &[1, 2],
        Condition::PartlyCloudy,
        "Mild clouds; sunglasses and light layers should do.",
    ),
    band(
        &[3],
        Condition::Overcast,
        "Gray morning—brighten the room to stay energized.",
    ),
    band(
        &[45, 48],
        Condition::Foggy,
        "Fog ahead—leave a few extra minutes for low visibility.",
    ),
    band(
        &[51, 53, 55],
        Condition::Drizzle,
        "Light drizzle—pack a light jacket or umbrella.",
    ),
    band(
        &[56, 57],
        Condition::FreezingDrizzle,
        "Freezing drizzle can glaze walkways; move carefully.",
    ),
    band(
        &[61, 63, 65],
        Condition::Rain,
        "Steady rain likely—consider a 10-minute buffer.",
    ),
    band(
        &[66, 67],
        Condition::FreezingRain,
        "Icy rain can snarl traffic; give yourself extra time.",
    ),
    band(
        &[71, 73, 75],
        Condition::Snow,
        "Snow on the ground—plan for slower travel.",
    ),
    band(
        &[77],
        Condition::SnowGrains,
        "Snow grains can be slick; wear shoes with traction.",
    ),
    band(
        &[80, 81, 82],
        Condition::RainShowers,
        "On-and-off showers—umbrella recommended.",
    ),
    band(
        &[85, 86],
        Condition::SnowShowers,
        "Passing snow showers—bundle up and watch footing.",
    ),
    band(
        &[95, 96, 99],
        Condition::Thunderstorm,
        "Storms possible—check alerts before heading out.",
    ),
];

/// The outlook for codes no band claims.
pub const FALLBACK: Outlook = Outlook {
    condition: Condition::PartlyCloudy,
    tip: "Weather is changing—peek at radar for local details.",
};

/// Maps a WMO weather code to its outlook. Total: unknown codes get
/// [`FALLBACK`].
pub fn outlook_for(code: i64) -> Outlook {
    BANDS
        .iter()
        .find(|b| b.codes.contains(&code))
        .map(|b| b.outlook)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_code() {
        let expected: &[(&[i64], Condition, &str)] = &[
            (&[0], Condition::Clear, "☀️"),
            (&[1, 2], Condition::PartlyCloudy, "🌤️"),
            (&[3], Condition::Overcast, "☁️"),
            (&[45, 48], Condition::Foggy, "🌫️"),
            (&[51, 53, 55], Condition::Drizzle, "🌦️"),
            (&[56, 57], Condition::FreezingDrizzle, "🌨️"),
            (&[61, 63, 65], Condition::Rain, "🌧️"),
            (&[66, 67], Condition::FreezingRain, "🌨️"),
            (&[71, 73, 75], Condition::Snow, "❄️"),
            (&[77], Condition::SnowGrains, "🌨️"),
            (&[80, 81, 82], Condition::RainShowers, "🌧️"),
            (&[85, 86], Condition::SnowShowers, "❄️"),
            (&[95, 96, 99], Condition::Thunderstorm, "⛈️"),
        ];
        for (codes, condition, emoji) in expected {
            for code in codes.iter() {
                let outlook = outlook_for(*code);
                assert_eq!(outlook.condition, *condition, "code {code}");
                assert_eq!(outlook.emoji(), *emoji, "code {code}");
                assert_ne!(outlook.tip, FALLBACK.tip, "code {code}");
            }
        }
    }

    #[test]
    fn test_tips() {
        assert_eq!(
            outlook_for(63).tip,
            "Steady rain likely—consider a 10-minute buffer."
        );
        assert_eq!(
            outlook_for(96).tip,
            "Storms possible—check alerts before heading out."
        );
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [-1, 4, 10, 46, 52, 62, 74, 78, 83, 90, 97, 100, 1000] {
            assert_eq!(outlook_for(code), FALLBACK, "code {code}");
        }
        assert_eq!(FALLBACK.condition.label(), "Partly Cloudy");
        assert_eq!(FALLBACK.emoji(), "🌤️");
    }
}
