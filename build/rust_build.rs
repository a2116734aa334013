/**
 * Generates rust sources for the metadata schema that the compiler fills in.
 */

const METADATA_PROTO: &str = "resources/phonemetadata.proto";

fn main() {
    println!("cargo:rerun-if-changed={}", METADATA_PROTO);
    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input(METADATA_PROTO)
        .cargo_out_dir("proto_gen")
        .run_from_script();
}
