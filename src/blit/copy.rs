use crate::blit::{Layout, clip::ClippedBlit};

const WORD: usize = 8;

/// Row copy strategy, chosen by exact row length in bytes.
///
/// Row lengths of common tile sizes get a fully unrolled sequence of 8-byte word copies;
/// anything else falls back to a plain byte-range copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowCopy {
    /// 128 bytes as 16 words.
    Words16,
    /// 64 bytes as 8 words.
    Words8,
    /// 32 bytes as 4 words.
    Words4,
    /// 16 bytes as 2 words.
    Words2,
    /// 8 bytes as 1 word.
    Words1,
    /// 4 bytes as one 32-bit word.
    Word32,
    /// Any other length.
    Bytes(usize),
}

impl RowCopy {
    /// Strategy for rows of `len` bytes.
    pub fn for_row_len(len: usize) -> Self {
        match len {
            128 => RowCopy::Words16,
            64 => RowCopy::Words8,
            32 => RowCopy::Words4,
            16 => RowCopy::Words2,
            8 => RowCopy::Words1,
            4 => RowCopy::Word32,
            n => RowCopy::Bytes(n),
        }
    }

    /// Bytes copied per row.
    pub fn row_len(self) -> usize {
        match self {
            RowCopy::Words16 => 16 * WORD,
            RowCopy::Words8 => 8 * WORD,
            RowCopy::Words4 => 4 * WORD,
            RowCopy::Words2 => 2 * WORD,
            RowCopy::Words1 => WORD,
            RowCopy::Word32 => 4,
            RowCopy::Bytes(n) => n,
        }
    }

    /// Copy one row. Both slices must hold at least [`RowCopy::row_len`] bytes.
    #[inline]
    pub fn copy_row(self, dst: &mut [u8], src: &[u8]) {
        match self {
            RowCopy::Words16 => copy_words_16(dst, src),
            RowCopy::Words8 => copy_words_8(dst, src),
            RowCopy::Words4 => copy_words_4(dst, src),
            RowCopy::Words2 => copy_words_2(dst, src),
            RowCopy::Words1 => copy_word(dst, src, 0),
            RowCopy::Word32 => dst[..4].copy_from_slice(&src[..4]),
            RowCopy::Bytes(n) => dst[..n].copy_from_slice(&src[..n]),
        }
    }

    /// Copy `rows` rows, advancing each offset by its own stride after every row.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_rows(
        self,
        dst: &mut [u8],
        mut dst_offset: usize,
        dst_stride: usize,
        src: &[u8],
        mut src_offset: usize,
        src_stride: usize,
        rows: usize,
    ) {
        let len = self.row_len();
        for _ in 0..rows {
            self.copy_row(
                &mut dst[dst_offset..dst_offset + len],
                &src[src_offset..src_offset + len],
            );
            dst_offset += dst_stride;
            src_offset += src_stride;
        }
    }
}

/// Copy a clipped rectangle between two buffers of the same pixel size.
///
/// When both strides equal the row length the rectangle is one contiguous block and is copied
/// in a single operation.
pub(crate) fn copy_rect(
    dst: &mut [u8],
    dst_layout: Layout,
    src: &[u8],
    src_layout: Layout,
    clipped: ClippedBlit,
) {
    let rows = clipped.height as usize;
    let row_len = clipped.width as usize * src_layout.bytes_per_pixel;

    if dst_layout.stride == src_layout.stride && row_len == src_layout.stride {
        let dst_start = clipped.dest_y as usize * row_len;
        let src_start = clipped.src_y as usize * row_len;
        let count = rows * row_len;
        dst[dst_start..dst_start + count].copy_from_slice(&src[src_start..src_start + count]);
        return;
    }

    let dst_offset = dst_layout.offset(clipped.dest_x as usize, clipped.dest_y as usize);
    let src_offset = src_layout.offset(clipped.src_x as usize, clipped.src_y as usize);
    RowCopy::for_row_len(row_len).copy_rows(
        dst,
        dst_offset,
        dst_layout.stride,
        src,
        src_offset,
        src_layout.stride,
        rows,
    );
}

#[inline(always)]
fn copy_word(dst: &mut [u8], src: &[u8], index: usize) {
    let at = index * WORD;
    dst[at..at + WORD].copy_from_slice(&src[at..at + WORD]);
}

macro_rules! unrolled_words {
    ($name:ident: $($index:literal)+) => {
        #[inline(always)]
        fn $name(dst: &mut [u8], src: &[u8]) {
            $(copy_word(dst, src, $index);)+
        }
    };
}

unrolled_words!(copy_words_16: 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15);
unrolled_words!(copy_words_8: 0 1 2 3 4 5 6 7);
unrolled_words!(copy_words_4: 0 1 2 3);
unrolled_words!(copy_words_2: 0 1);

#[cfg(test)]
#[path = "../../tests/unit/blit/copy.rs"]
mod tests;
