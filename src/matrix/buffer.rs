//! Aligned storage for matrix elements.

use std::alloc::{self, Layout};
use std::ptr::NonNull;
use std::slice;

use crate::error::MatrixError;

/// Alignment in bytes required by the 128-bit loads in the SIMD kernels.
pub const SIMD_ALIGN: usize = 16;

/// An owned, 16-byte-aligned buffer of `i32` values.
///
/// Allocation and release are paired in one type: the layout used to obtain
/// the memory is stored alongside the pointer and reused by `Drop`, so an
/// aligned allocation can never reach a mismatched deallocator. All elements
/// are zero-initialized on allocation and on growth.
pub struct AlignedBuf {
    ptr: NonNull<i32>,
    len: usize,
    layout: Layout,
}

impl AlignedBuf {
    /// Allocates a zero-filled buffer of `len` elements.
    pub fn zeroed(len: usize) -> Result<Self, MatrixError> {
        let layout = Self::layout_for(len)?;
        if layout.size() == 0 {
            return Ok(AlignedBuf {
                ptr: NonNull::dangling(),
                len: 0,
                layout,
            });
        }
        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<i32>()) else {
            return Err(MatrixError::Allocation {
                bytes: layout.size(),
            });
        };
        Ok(AlignedBuf { ptr, len, layout })
    }

    /// Reallocates to `new_len` elements, preserving existing values.
    ///
    /// The added tail is zero-filled. Shrinking is not supported; callers
    /// only ever grow (the loader doubles, the factories size up front).
    pub fn grow(&mut self, new_len: usize) -> Result<(), MatrixError> {
        debug_assert!(new_len >= self.len);
        let mut bigger = AlignedBuf::zeroed(new_len)?;
        if self.len > 0 {
            // SAFETY: both buffers are live, distinct, and at least self.len long.
            unsafe {
                bigger
                    .ptr
                    .as_ptr()
                    .copy_from_nonoverlapping(self.ptr.as_ptr(), self.len);
            }
        }
        *self = bigger;
        Ok(())
    }

    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[i32] {
        // SAFETY: ptr covers len initialized elements for the buffer's lifetime.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        // SAFETY: as above, and we hold the unique reference.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    fn layout_for(len: usize) -> Result<Layout, MatrixError> {
        Layout::array::<i32>(len)
            .and_then(|layout| layout.align_to(SIMD_ALIGN))
            .map_err(|_| MatrixError::Allocation {
                bytes: len.saturating_mul(size_of::<i32>()),
            })
    }
}

impl Drop for AlignedBuf {
    fn drop(&mut self) {
        if self.layout.size() > 0 {
            // SAFETY: ptr was obtained from alloc_zeroed with this exact layout.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), self.layout);
            }
        }
    }
}
