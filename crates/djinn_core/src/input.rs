//! Keyboard and mouse codes
//!
//! Numeric values match GLFW, which is what the engine's window layer reports.

use serde::{Deserialize, Serialize};

/// Physical key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum KeyCode {
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    D0 = 48,
    D1 = 49,
    D2 = 50,
    D3 = 51,
    D4 = 52,
    D5 = 53,
    D6 = 54,
    D7 = 55,
    D8 = 56,
    D9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl KeyCode {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            32 => Self::Space,
            39 => Self::Apostrophe,
            44 => Self::Comma,
            45 => Self::Minus,
            46 => Self::Period,
            47 => Self::Slash,
            48 => Self::D0,
            49 => Self::D1,
            50 => Self::D2,
            51 => Self::D3,
            52 => Self::D4,
            53 => Self::D5,
            54 => Self::D6,
            55 => Self::D7,
            56 => Self::D8,
            57 => Self::D9,
            59 => Self::Semicolon,
            61 => Self::Equal,
            65 => Self::A,
            66 => Self::B,
            67 => Self::C,
            68 => Self::D,
            69 => Self::E,
            70 => Self::F,
            71 => Self::G,
            72 => Self::H,
            73 => Self::I,
            74 => Self::J,
            75 => Self::K,
            76 => Self::L,
            77 => Self::M,
            78 => Self::N,
            79 => Self::O,
            80 => Self::P,
            81 => Self::Q,
            82 => Self::R,
            83 => Self::S,
            84 => Self::T,
            85 => Self::U,
            86 => Self::V,
            87 => Self::W,
            88 => Self::X,
            89 => Self::Y,
            90 => Self::Z,
            91 => Self::LeftBracket,
            92 => Self::Backslash,
            93 => Self::RightBracket,
            96 => Self::GraveAccent,
            256 => Self::Escape,
            257 => Self::Enter,
            258 => Self::Tab,
            259 => Self::Backspace,
            260 => Self::Insert,
            261 => Self::Delete,
            262 => Self::Right,
            263 => Self::Left,
            264 => Self::Down,
            265 => Self::Up,
            266 => Self::PageUp,
            267 => Self::PageDown,
            268 => Self::Home,
            269 => Self::End,
            280 => Self::CapsLock,
            281 => Self::ScrollLock,
            282 => Self::NumLock,
            283 => Self::PrintScreen,
            284 => Self::Pause,
            290 => Self::F1,
            291 => Self::F2,
            292 => Self::F3,
            293 => Self::F4,
            294 => Self::F5,
            295 => Self::F6,
            296 => Self::F7,
            297 => Self::F8,
            298 => Self::F9,
            299 => Self::F10,
            300 => Self::F11,
            301 => Self::F12,
            340 => Self::LeftShift,
            341 => Self::LeftControl,
            342 => Self::LeftAlt,
            343 => Self::LeftSuper,
            344 => Self::RightShift,
            345 => Self::RightControl,
            346 => Self::RightAlt,
            347 => Self::RightSuper,
            348 => Self::Menu,
            _ => return None,
        })
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MouseCode {
    Button0 = 0,
    Button1 = 1,
    Button2 = 2,
    Button3 = 3,
    Button4 = 4,
    Button5 = 5,
    Button6 = 6,
    Button7 = 7,
}

impl MouseCode {
    pub const LEFT: Self = Self::Button0;
    pub const RIGHT: Self = Self::Button1;
    pub const MIDDLE: Self = Self::Button2;

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Button0,
            1 => Self::Button1,
            2 => Self::Button2,
            3 => Self::Button3,
            4 => Self::Button4,
            5 => Self::Button5,
            6 => Self::Button6,
            7 => Self::Button7,
            _ => return None,
        })
    }
}
