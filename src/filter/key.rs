use serde::Serialize;
use std::fmt;
use std::str::FromStr;

macro_rules! key_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident {
        $($vname:ident = $val:expr $(, alias $alias:literal)*;)*
    }) => {
        $(#[$meta])*
        $vis enum $name {
            $($vname = $val,)*
        }

        impl $name {
            /// Identifier used in filter scripts.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$vname => stringify!($vname),)*
                }
            }

            pub fn code(self) -> i32 {
                self as i32
            }

            /// Every accepted identifier, aliases included.
            pub const NAMES: &'static [(&'static str, $name)] = &[
                $((stringify!($vname), $name::$vname), $(($alias, $name::$vname),)*)*
            ];
        }

        impl std::convert::TryFrom<i32> for $name {
            type Error = ();

            fn try_from(v: i32) -> Result<Self, Self::Error> {
                match v {
                    $(x if x == $name::$vname as i32 => Ok($name::$vname),)*
                    _ => Err(()),
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            /// Accepts the identifier (case-sensitive), a legacy alias, or a numeric key code.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($vname) $(| $alias)* => Ok($name::$vname),)*
                    _ => s.parse::<i32>().map_err(|_| ()).and_then($name::try_from),
                }
            }
        }
    }
}

key_enum! {
    /// Keyboard key codes of the host input system.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
    pub enum Key {
        None = 0;
        Cancel = 1;
        Back = 2;
        Tab = 3;
        LineFeed = 4;
        Clear = 5;
        Enter = 6, alias "Return";
        Pause = 7;
        CapsLock = 8, alias "Capital";
        KanaMode = 9, alias "HangulMode";
        JunjaMode = 10;
        FinalMode = 11;
        HanjaMode = 12, alias "KanjiMode";
        Escape = 13;
        ImeConvert = 14;
        ImeNonConvert = 15;
        ImeAccept = 16;
        ImeModeChange = 17;
        Space = 18;
        PageUp = 19, alias "Prior";
        PageDown = 20, alias "Next";
        End = 21;
        Home = 22;
        Left = 23;
        Up = 24;
        Right = 25;
        Down = 26;
        Select = 27;
        Print = 28;
        Execute = 29;
        PrintScreen = 30, alias "Snapshot";
        Insert = 31;
        Delete = 32;
        Help = 33;
        D0 = 34;
        D1 = 35;
        D2 = 36;
        D3 = 37;
        D4 = 38;
        D5 = 39;
        D6 = 40;
        D7 = 41;
        D8 = 42;
        D9 = 43;
        A = 44;
        B = 45;
        C = 46;
        D = 47;
        E = 48;
        F = 49;
        G = 50;
        H = 51;
        I = 52;
        J = 53;
        K = 54;
        L = 55;
        M = 56;
        N = 57;
        O = 58;
        P = 59;
        Q = 60;
        R = 61;
        S = 62;
        T = 63;
        U = 64;
        V = 65;
        W = 66;
        X = 67;
        Y = 68;
        Z = 69;
        LWin = 70;
        RWin = 71;
        Apps = 72;
        Sleep = 73;
        NumPad0 = 74;
        NumPad1 = 75;
        NumPad2 = 76;
        NumPad3 = 77;
        NumPad4 = 78;
        NumPad5 = 79;
        NumPad6 = 80;
        NumPad7 = 81;
        NumPad8 = 82;
        NumPad9 = 83;
        Multiply = 84;
        Add = 85;
        Separator = 86;
        Subtract = 87;
        Decimal = 88;
        Divide = 89;
        F1 = 90;
        F2 = 91;
        F3 = 92;
        F4 = 93;
        F5 = 94;
        F6 = 95;
        F7 = 96;
        F8 = 97;
        F9 = 98;
        F10 = 99;
        F11 = 100;
        F12 = 101;
        F13 = 102;
        F14 = 103;
        F15 = 104;
        F16 = 105;
        F17 = 106;
        F18 = 107;
        F19 = 108;
        F20 = 109;
        F21 = 110;
        F22 = 111;
        F23 = 112;
        F24 = 113;
        NumLock = 114;
        Scroll = 115;
        LeftShift = 116;
        RightShift = 117;
        LeftCtrl = 118;
        RightCtrl = 119;
        LeftAlt = 120;
        RightAlt = 121;
        BrowserBack = 122;
        BrowserForward = 123;
        BrowserRefresh = 124;
        BrowserStop = 125;
        BrowserSearch = 126;
        BrowserFavorites = 127;
        BrowserHome = 128;
        VolumeMute = 129;
        VolumeDown = 130;
        VolumeUp = 131;
        MediaNextTrack = 132;
        MediaPreviousTrack = 133;
        MediaStop = 134;
        MediaPlayPause = 135;
        LaunchMail = 136;
        SelectMedia = 137;
        LaunchApplication1 = 138;
        LaunchApplication2 = 139;
        OemSemicolon = 140, alias "Oem1";
        OemPlus = 141;
        OemComma = 142;
        OemMinus = 143;
        OemPeriod = 144;
        OemQuestion = 145, alias "Oem2";
        OemTilde = 146, alias "Oem3";
        AbntC1 = 147;
        AbntC2 = 148;
        OemOpenBrackets = 149, alias "Oem4";
        OemPipe = 150, alias "Oem5";
        OemCloseBrackets = 151, alias "Oem6";
        OemQuotes = 152, alias "Oem7";
        Oem8 = 153;
        OemBackslash = 154, alias "Oem102";
        ImeProcessed = 155;
        System = 156;
        OemAttn = 157, alias "DbeAlphanumeric";
        OemFinish = 158, alias "DbeKatakana";
        OemCopy = 159, alias "DbeHiragana";
        OemAuto = 160, alias "DbeSbcsChar";
        OemEnlw = 161, alias "DbeDbcsChar";
        OemBackTab = 162, alias "DbeRoman";
        Attn = 163, alias "DbeNoRoman";
        CrSel = 164, alias "DbeEnterWordRegisterMode";
        ExSel = 165, alias "DbeEnterImeConfigureMode";
        EraseEof = 166, alias "DbeFlushString";
        Play = 167, alias "DbeCodeInput";
        Zoom = 168, alias "DbeNoCodeInput";
        NoName = 169, alias "DbeDetermineString";
        Pa1 = 170, alias "DbeEnterDialogConversionMode";
        OemClear = 171;
        DeadCharProcessed = 172;
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
