use songmeta::{AlbumField, AlbumMetadata, SongMetadata};

/// Print a song as an aligned field list, with its album nested below
pub fn print_song(song: &SongMetadata) {
    println!("Title:        {}", song.title);
    println!("Artist:       {}", song.artist);
    println!("Duration:     {} ms", song.duration);
    println!("Genre:        {}", song.genre);
    println!("Release date: {}", song.release_date);
    println!("Artwork:      {}", song.artwork_url);

    match &song.album {
        AlbumField::Reference(reference) => println!("Album:        {reference}"),
        AlbumField::Resolved(album) => {
            println!("Album:");
            print_album(album, "  ");
        }
    }
}

pub fn print_album(album: &AlbumMetadata, indent: &str) {
    println!("{indent}Title:        {}", album.title);
    println!("{indent}Artist:       {}", album.artist);
    println!("{indent}Release date: {}", album.release_date);
    println!("{indent}Artwork:      {}", album.artwork_url);
    println!("{indent}Description:  {}", album.description);
}
