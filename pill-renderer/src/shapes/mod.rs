mod pill;

pub(crate) use pill::Pill;
