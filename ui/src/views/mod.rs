use crate::carousel::SlideImage;
use crate::t;

mod home;
mod pathnames;

pub use home::Home;
pub use pathnames::Pathnames;

/// The fixed slide list both pages hand to the background carousel. Alt
/// text is localized; the image files are deploy-time statics under
/// `/images/`.
pub(crate) fn background_images() -> Vec<SlideImage> {
    vec![
        SlideImage::new("/images/coastline.jpg", t!("image-alt-coastline")),
        SlideImage::new("/images/harbour.jpg", t!("image-alt-harbour")),
        SlideImage::new("/images/rainforest.jpg", t!("image-alt-rainforest")),
    ]
}
