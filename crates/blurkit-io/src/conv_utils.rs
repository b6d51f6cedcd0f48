/// Swap the first and third channel of every interleaved 3-channel pixel.
///
/// Converts RGB to BGR and back.
pub fn swap_rb_in_place(buf: &mut [u8]) {
    for pixel in buf.chunks_exact_mut(3) {
        pixel.swap(0, 2);
    }
}
