use std::iter::FusedIterator;
use std::slice::{Iter, IterMut};

use image::buffer::{Pixels, PixelsMut};
use image::{Rgb, RgbImage};

/// color channels used per pixel: red, green, blue
pub const CHANNELS: u8 = 3;

/// Position of one color channel inside a pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelAddress {
    pub x: u32,
    pub y: u32,
    pub channel: u8,
}

/// Walks all channel addresses of a `width` x `height` grid in the one order
/// hiding and unveiling agree on: rows top to bottom, pixels left to right,
/// and inside a pixel channel by channel (R, G, B).
///
/// The walk is lazy and finite, clone it or build a new one to start over.
#[derive(Debug, Clone)]
pub struct ChannelWalk {
    width: u32,
    channels: u8,
    i: usize,
    len: usize,
}

impl ChannelWalk {
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        Self {
            width,
            channels,
            i: 0,
            len: width as usize * height as usize * channels as usize,
        }
    }

    pub fn over(image: &RgbImage) -> Self {
        Self::new(image.width(), image.height(), CHANNELS)
    }

    /// total number of addresses of this walk, which is one bit of capacity each
    pub fn capacity(&self) -> usize {
        self.len
    }
}

impl Iterator for ChannelWalk {
    type Item = ChannelAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i == self.len {
            return None;
        }
        let channels = self.channels as usize;
        let pixel = self.i / channels;
        let address = ChannelAddress {
            x: (pixel % self.width as usize) as u32,
            y: (pixel / self.width as usize) as u32,
            channel: (self.i % channels) as u8,
        };
        self.i += 1;

        Some(address)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.i;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChannelWalk {}
impl FusedIterator for ChannelWalk {}

/// Readonly channel values of an image, paired with their address, in walk order.
pub struct ChannelIter<'a> {
    walk: ChannelWalk,
    pixels: Pixels<'a, Rgb<u8>>,
    colors: Iter<'a, u8>,
}

impl<'a> ChannelIter<'a> {
    pub fn new(image: &'a RgbImage) -> Self {
        Self {
            walk: ChannelWalk::over(image),
            pixels: image.pixels(),
            colors: <&[u8]>::default().iter(),
        }
    }
}

impl<'a> Iterator for ChannelIter<'a> {
    type Item = (ChannelAddress, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let color = match self.colors.next() {
            Some(color) => color,
            None => {
                self.colors = self.pixels.next()?.0.iter();
                self.colors.next()?
            }
        };

        self.walk.next().map(|address| (address, *color))
    }
}

/// Mutable channel values of an image, paired with their address, in walk order.
pub struct ChannelIterMut<'a> {
    walk: ChannelWalk,
    pixels: PixelsMut<'a, Rgb<u8>>,
    colors: IterMut<'a, u8>,
}

impl<'a> ChannelIterMut<'a> {
    pub fn new(image: &'a mut RgbImage) -> Self {
        Self {
            walk: ChannelWalk::over(image),
            pixels: image.pixels_mut(),
            colors: <&mut [u8]>::default().iter_mut(),
        }
    }
}

impl<'a> Iterator for ChannelIterMut<'a> {
    type Item = (ChannelAddress, &'a mut u8);

    fn next(&mut self) -> Option<Self::Item> {
        let color = match self.colors.next() {
            Some(color) => color,
            None => {
                self.colors = self.pixels.next()?.0.iter_mut();
                self.colors.next()?
            }
        };

        self.walk.next().map(|address| (address, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_4x6_linear_growing_colors, prepare_5x5_image};

    #[test]
    fn should_walk_rows_then_pixels_then_channels() {
        let mut walk = ChannelWalk::new(2, 2, 3);

        let expected = [
            (0, 0, 0),
            (0, 0, 1),
            (0, 0, 2),
            (1, 0, 0),
            (1, 0, 1),
            (1, 0, 2),
            (0, 1, 0),
            (0, 1, 1),
            (0, 1, 2),
            (1, 1, 0),
            (1, 1, 1),
            (1, 1, 2),
        ];
        for (x, y, channel) in expected {
            assert_eq!(walk.next(), Some(ChannelAddress { x, y, channel }));
        }
        // ensure the walk is exhausted
        assert!(walk.next().is_none());
    }

    #[test]
    fn walk_length_is_width_times_height_times_channels() {
        let walk = ChannelWalk::new(10, 7, 3);

        assert_eq!(walk.len(), 210);
        assert_eq!(walk.capacity(), 210);
        assert_eq!(walk.count(), 210);
        assert_eq!(ChannelWalk::new(0, 7, 3).count(), 0);
    }

    #[test]
    fn walk_is_restartable() {
        let walk = ChannelWalk::new(3, 2, 3);
        let mut first = walk.clone();
        first.nth(4);

        let again: Vec<_> = walk.clone().collect();
        let fresh: Vec<_> = ChannelWalk::new(3, 2, 3).collect();
        assert_eq!(again, fresh);
        assert_eq!(first.len(), 13);
    }

    #[test]
    fn channel_iter_follows_the_walk() {
        let img = prepare_4x6_linear_growing_colors();
        let mut iter = ChannelIter::new(&img);

        for y in 0..img.height() {
            for x in 0..img.width() {
                let expected_pixel = img.get_pixel(x, y);
                for channel in 0..CHANNELS {
                    let (address, color) = iter
                        .next()
                        .unwrap_or_else(|| panic!("Color at ({x}, {y}) was not even existing!"));

                    assert_eq!(address, ChannelAddress { x, y, channel });
                    assert_eq!(
                        color, expected_pixel.0[channel as usize],
                        "Color at ({x}, {y}) does not match"
                    );
                }
            }
        }
        // ensure iterator is exhausted
        assert!(iter.next().is_none());
    }

    #[test]
    fn channel_iter_yields_linear_growing_colors() {
        let mut img = prepare_4x6_linear_growing_colors();
        for (i, (_, c)) in ChannelIter::new(&img).enumerate() {
            assert_eq!(c, i as u8, "the ({i}+1)-th color was wrong");
        }

        for (i, (_, c)) in ChannelIterMut::new(&mut img).enumerate() {
            assert_eq!(*c, i as u8, "the ({i}+1)-th color was wrong");
        }
    }

    #[test]
    fn it_should_be_possible_to_mutate_colors() {
        let mut img = prepare_5x5_image();
        let first_pixel = *img.get_pixel(0, 0);
        {
            let mut iter = ChannelIterMut::new(&mut img);
            let (_, color) = iter.next().unwrap();
            *color += 0x2;
        }
        let first_pixel_changed = *img.get_pixel(0, 0);

        assert_ne!(
            first_pixel.0[0], first_pixel_changed.0[0],
            "First Color (Red-Channel) should have been changed."
        );
        assert_eq!(
            first_pixel.0[1], first_pixel_changed.0[1],
            "Second Color (Green-Channel) should be equal."
        );
    }

    #[test]
    fn iterators_on_empty_images_yield_nothing() {
        let mut img = RgbImage::new(0, 0);

        assert!(ChannelIter::new(&img).next().is_none());
        assert!(ChannelIterMut::new(&mut img).next().is_none());
    }
}
