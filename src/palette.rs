// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The six-color table the field is drawn through.  The table stores
//! each color as a packed 0x00RRGGBB triple whose bytes are signed
//! intensities, 0x7F being full brightness, as signed-byte color calls
//! expect them.  `Rgb::expand` turns those into ordinary 8-bit
//! channels.

/// Number of entries in the palette, and so the period of the
/// animation.
pub const PALETTE_LEN: usize = 6;

const COLORTABLE: [u32; PALETTE_LEN] = [
    0x007F_0000,
    0x007F_3F00,
    0x007F_7F00,
    0x0000_7F00,
    0x0000_007F,
    0x007F_007F,
];

/// Red, green, blue.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Unpacks the three lowest-order bytes of a 0x00RRGGBB word.
    pub fn from_packed(packed: u32) -> Rgb {
        Rgb(
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        )
    }

    /// Packs back into 0x00RRGGBB, the layout the window wants.
    pub fn to_packed(self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }

    /// Reads each channel as a signed byte intensity (0x7F is full,
    /// anything negative is off) and rescales it to 0..=255.
    pub fn expand(self) -> Rgb {
        fn channel(b: u8) -> u8 {
            let signed = i32::from(b as i8).max(0);
            (signed * 255 / 127) as u8
        }
        Rgb(channel(self.0), channel(self.1), channel(self.2))
    }
}

/// A fixed, ordered table of colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    entries: [u32; PALETTE_LEN],
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            entries: COLORTABLE,
        }
    }
}

impl Palette {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Which entry a field value lands on once the animation offset is
    /// applied: (value + offset) mod len.
    pub fn index(&self, value: u32, offset: usize) -> usize {
        let len = self.len();
        let index = ((value as usize) % len + offset) % len;
        debug_assert!(index < len, "palette index {} out of {}", index, len);
        index
    }

    /// The packed entry at `index`.
    pub fn entry(&self, index: usize) -> u32 {
        self.entries[index]
    }

    /// The display color for a field value at the given offset.
    pub fn color(&self, value: u32, offset: usize) -> Rgb {
        Rgb::from_packed(self.entry(self.index(value, offset))).expand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_wraps_around() {
        let p = Palette::default();
        assert_eq!(p.index(0, 0), 0);
        assert_eq!(p.index(5, 1), 0);
        assert_eq!(p.index(3, 4), 1);
        assert_eq!(p.index(0x00FF_FFFF, 5), (0x00FF_FFFF + 5) % 6);
        assert_eq!(p.index(u32::max_value(), 5), ((u32::max_value() as u64 + 5) % 6) as usize);
    }

    #[test]
    fn index_is_always_in_range() {
        let p = Palette::default();
        for value in (0..64).chain(vec![0x0001_0101, 0x00FE_FEFE, 0x00FF_FFFF]) {
            for offset in 0..PALETTE_LEN {
                assert!(p.index(value, offset) < PALETTE_LEN);
            }
        }
    }

    #[test]
    fn unpacks_low_three_bytes() {
        assert_eq!(Rgb::from_packed(0x007F_3F00), Rgb(0x7F, 0x3F, 0x00));
        assert_eq!(Rgb::from_packed(0xAB12_3456), Rgb(0x12, 0x34, 0x56));
        assert_eq!(Rgb(0x12, 0x34, 0x56).to_packed(), 0x0012_3456);
    }

    #[test]
    fn signed_channels_expand_to_full_range() {
        assert_eq!(Rgb(0x7F, 0x3F, 0x00).expand(), Rgb(255, 126, 0));
        assert_eq!(Rgb(0x80, 0xFF, 0x01).expand(), Rgb(0, 0, 2));
    }

    #[test]
    fn first_entry_is_red() {
        let p = Palette::default();
        assert_eq!(p.len(), PALETTE_LEN);
        assert_eq!(p.color(0, 0), Rgb(255, 0, 0));
        assert_eq!(p.color(0, 4), Rgb(0, 0, 255));
    }
}
