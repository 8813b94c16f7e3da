mod view;

pub use view::QrCodePage;
