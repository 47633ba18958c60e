macro_rules! std {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "std")]
            $item
        )*
    };
}

macro_rules! alloc {
    ($($item:item)*) => {
        $(
            #[cfg(feature = "alloc")]
            $item
        )*
    };
}

macro_rules! no_std_io {
    ($($item:item)*) => {
        $(
            #[cfg(all(feature = "embedded-io", not(feature = "std")))]
            $item
        )*
    };
}

macro_rules! wolfcrypt {
    ($($item:item)*) => {
        $(
            #[cfg_attr(docsrs, doc(cfg(feature = "wolfcrypt")))]
            #[cfg(feature = "wolfcrypt")]
            $item
        )*
    };
}
