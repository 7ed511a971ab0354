mod designer;

pub use designer::AssetDesigner;
