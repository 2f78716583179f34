use crate::primitives::Int64;

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

// The assign forms overwrite the receiver with the result of an operation
// on their operands. Each one accumulates into a local buffer and stores it
// in a single step, so the receiver may alias an operand without the
// computation ever reading partially written state.
impl Int64 {
    /// receiver := `-n` (two's complement: bitwise complement plus one).
    pub fn assign_neg(&mut self, n: &Int64) -> &mut Self {
        let mut out = [0u8; 8];
        let mut carry = 1u16;

        for (o, &b) in out.iter_mut().zip(n.0.iter()) {
            let cur = (!b) as u16 + carry;
            *o = (cur & 0xFF) as u8;
            carry = cur >> 8;
        }

        self.0 = out;
        self
    }

    /// receiver := `a + b`, modulo 2^64.
    pub fn assign_add(&mut self, a: &Int64, b: &Int64) -> &mut Self {
        let mut out = [0u8; 8];
        let mut carry = 0u16;

        for ((&x, &y), o) in a.0.iter().zip(b.0.iter()).zip(out.iter_mut()) {
            let sum = x as u16 + y as u16 + carry;
            *o = (sum & 0xFF) as u8;
            carry = sum >> 8;
        }

        self.0 = out;
        self
    }

    /// receiver := `a - b`, modulo 2^64.
    pub fn assign_sub(&mut self, a: &Int64, b: &Int64) -> &mut Self {
        let mut out = [0u8; 8];
        let mut borrow = 0i16;

        for ((&x, &y), o) in a.0.iter().zip(b.0.iter()).zip(out.iter_mut()) {
            let lhs = x as i16;
            let sub = y as i16 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u8;
                borrow = 0;
            } else {
                *o = (lhs + 256 - sub) as u8;
                borrow = 1;
            }
        }

        self.0 = out;
        self
    }
}

impl Add for Int64 {
    type Output = Int64;

    fn add(self, rhs: Int64) -> Self::Output {
        let mut out = Int64::ZERO;
        out.assign_add(&self, &rhs);

        out
    }
}

impl Sub for Int64 {
    type Output = Int64;

    fn sub(self, rhs: Int64) -> Self::Output {
        let mut out = Int64::ZERO;
        out.assign_sub(&self, &rhs);

        out
    }
}

impl Neg for Int64 {
    type Output = Int64;

    fn neg(self) -> Self::Output {
        let mut out = Int64::ZERO;
        out.assign_neg(&self);

        out
    }
}

impl AddAssign for Int64 {
    fn add_assign(&mut self, rhs: Int64) {
        let lhs = *self;
        self.assign_add(&lhs, &rhs);
    }
}

impl SubAssign for Int64 {
    fn sub_assign(&mut self, rhs: Int64) {
        let lhs = *self;
        self.assign_sub(&lhs, &rhs);
    }
}
