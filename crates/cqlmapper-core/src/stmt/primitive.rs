use super::Value;
use crate::{Error, Result};

use uuid::Uuid;

/// A field type that maps to a single column.
///
/// `#[derive(Record)]` implements it for records too, so a record held by a
/// field that does not embed it is stored as one [`Value::Record`] column.
pub trait Primitive: Sized {
    /// Name used in conversion errors.
    const TYPE_NAME: &'static str;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;
}

/// An addressable column slot.
///
/// Reads produce the field's current value for write binding; drivers scanning
/// a row call [`Slot::assign`] to store the received value in the field.
pub trait Slot {
    fn value(&self) -> Value;

    fn assign(&mut self, value: Value) -> Result<()>;
}

impl<T: Primitive> Slot for T {
    fn value(&self) -> Value {
        self.to_value()
    }

    fn assign(&mut self, value: Value) -> Result<()> {
        *self = T::load(value)?;
        Ok(())
    }
}

impl core::fmt::Debug for dyn Slot + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Slot").field(&self.value()).finish()
    }
}

// Integers load from any integer value whose content fits the target type.
macro_rules! impl_integer {
    ( $( $ty:ident => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn load(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I8(v) => $ty::try_from(*v).ok(),
                        Value::I16(v) => $ty::try_from(*v).ok(),
                        Value::I32(v) => $ty::try_from(*v).ok(),
                        Value::I64(v) => $ty::try_from(*v).ok(),
                        Value::U8(v) => $ty::try_from(*v).ok(),
                        Value::U16(v) => $ty::try_from(*v).ok(),
                        Value::U32(v) => $ty::try_from(*v).ok(),
                        Value::U64(v) => $ty::try_from(*v).ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, Self::TYPE_NAME))
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl Primitive for bool {
    const TYPE_NAME: &'static str = "bool";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }

    fn to_value(&self) -> Value {
        Value::F32(*self)
    }
}

impl Primitive for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v.into()),
            Value::F64(v) => Ok(v),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for String {
    const TYPE_NAME: &'static str = "String";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    const TYPE_NAME: &'static str = "Vec<u8>";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Primitive for Uuid {
    const TYPE_NAME: &'static str = "Uuid";

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => match Uuid::parse_str(&v) {
                Ok(uuid) => Ok(uuid),
                Err(_) => Err(Error::type_conversion(
                    Value::String(v),
                    Self::TYPE_NAME,
                )),
            },
            _ => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }
}
